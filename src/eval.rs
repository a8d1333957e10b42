//! Numeric evaluation of expression trees under a variable-binding scope.

use std::collections::HashMap;

use num_traits::ToPrimitive;

use crate::error::{EqError, Result};
use crate::expr::Expr;

pub type Scope = HashMap<String, f64>;

/// Evaluate `expr` to an `f64`, binding variables from `scope`. The named
/// constants `pi` and `e` are always available; any other unbound symbol is
/// an evaluation error.
pub fn evaluate(expr: &Expr, scope: &Scope) -> Result<f64> {
    match expr {
        Expr::Variable(name) => lookup(name, scope),
        Expr::Constant(r) => r
            .to_f64()
            .ok_or_else(|| EqError::Eval(format!("constant out of f64 range: {r}"))),
        Expr::Add(a, b) => Ok(evaluate(a, scope)? + evaluate(b, scope)?),
        Expr::Sub(a, b) => Ok(evaluate(a, scope)? - evaluate(b, scope)?),
        Expr::Mul(a, b) => Ok(evaluate(a, scope)? * evaluate(b, scope)?),
        Expr::Div(a, b) => Ok(evaluate(a, scope)? / evaluate(b, scope)?),
        Expr::Pow(a, b) => Ok(evaluate(a, scope)?.powf(evaluate(b, scope)?)),
        Expr::Neg(a) => Ok(-evaluate(a, scope)?),
        Expr::Sin(a) => Ok(evaluate(a, scope)?.sin()),
        Expr::Cos(a) => Ok(evaluate(a, scope)?.cos()),
        Expr::Tan(a) => Ok(evaluate(a, scope)?.tan()),
        Expr::Asin(a) => Ok(evaluate(a, scope)?.asin()),
        Expr::Acos(a) => Ok(evaluate(a, scope)?.acos()),
        Expr::Atan(a) => Ok(evaluate(a, scope)?.atan()),
        Expr::Sqrt(a) => Ok(evaluate(a, scope)?.sqrt()),
        Expr::Exp(a) => Ok(evaluate(a, scope)?.exp()),
        Expr::Log(a) => Ok(evaluate(a, scope)?.ln()),
        Expr::Abs(a) => Ok(evaluate(a, scope)?.abs()),
    }
}

fn lookup(name: &str, scope: &Scope) -> Result<f64> {
    if let Some(&value) = scope.get(name) {
        return Ok(value);
    }
    match name {
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        _ => Err(EqError::Eval(format!("undefined symbol: {name}"))),
    }
}
