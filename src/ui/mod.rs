//! String-based API consumed by the calculator UI: raw text in, one
//! human-readable report out. Nothing here returns an error; every failure
//! is folded into the report text.

mod report;

use crate::calculus::differentiate as differentiate_expr;
use crate::error::Result;
use crate::eval::{Scope, evaluate};
use crate::format::{fmt_number, pretty};
use crate::parser::parse_expr;
use crate::polynomial::classify;
use crate::simplify::simplify_fully;
use crate::solver::solve_system;

pub use report::{render_polynomial, render_system};

/// Solve a system of equations, one per line, in the unknowns x, y, z, t.
pub fn solve_linear_system(lines: &[&str]) -> String {
    render_system(&solve_system(lines))
}

/// Solve a linear or quadratic polynomial equation in x.
pub fn solve_polynomial(input: &str) -> String {
    render_polynomial(&classify(input))
}

/// Simplify an arbitrary expression and, when it is fully determined,
/// append its numeric value.
pub fn simplify_expression(input: &str) -> String {
    let src = input.trim();
    if src.is_empty() {
        return "Enter an expression.".to_string();
    }

    let expr = match parse_expr(src) {
        Ok(expr) => expr,
        Err(_) => return "Error parsing expression.".to_string(),
    };

    let simplified = simplify_fully(expr);
    let rendered = pretty(&simplified);

    // Evaluation with no bindings succeeds only for closed expressions;
    // anything still holding a free variable gets the informational note.
    let numeric = match evaluate(&simplified, &Scope::new()) {
        Ok(value) => format!(
            "\n\nNumeric value (with current defaults):\n{}",
            fmt_number(value)
        ),
        Err(_) => "\n\nNumeric value depends on variable assignments.".to_string(),
    };

    format!("Simplified form:\n{rendered}{numeric}")
}

/// Differentiate an expression text with respect to `var` and render it.
pub fn diff(input: &str, var: &str) -> Result<String> {
    let expr = parse_expr(input)?;
    Ok(pretty(&simplify_fully(differentiate_expr(var, &expr))))
}

/// Simplify an expression text and render it.
pub fn simp(input: &str) -> Result<String> {
    let expr = parse_expr(input)?;
    Ok(pretty(&simplify_fully(expr)))
}
