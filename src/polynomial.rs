//! Quadratic/linear polynomial classification for one expression in `x`.
//!
//! The coefficients of `a*x^2 + b*x + c` are recovered from the expression
//! through symbolic derivatives evaluated at zero: `p(0) = c`, `p'(0) = b`,
//! `p''(0) = 2a`. The fit is then checked against the original expression at
//! fixed sample points; an expression the quadratic model cannot reproduce
//! is rejected rather than mis-solved.

use crate::calculus::differentiate;
use crate::error::Result;
use crate::eval::{Scope, evaluate};
use crate::parser::parse_expr;

/// Coefficient magnitudes below this count as zero during classification.
pub const EPS: f64 = 1e-12;
/// Maximum allowed fit error of the quadratic model at the sample points.
pub const FIT_TOLERANCE: f64 = 1e-6;
const SAMPLE_POINTS: [f64; 4] = [-2.0, -1.0, 1.0, 2.0];

#[derive(Debug, Clone)]
pub struct QuadraticModel {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone)]
pub enum PolyOutcome {
    EmptyInput,
    /// The expression is not a polynomial of degree <= 2 in `x`.
    UnsupportedDegree,
    /// `0 = 0`: every x is a solution.
    Identity,
    /// A non-zero constant: no x satisfies it.
    NoSolution,
    Linear { x: f64 },
    TwoReal { x1: f64, x2: f64 },
    DoubleRoot { x: f64 },
    Complex { re: f64, im: f64 },
    Failed,
}

pub fn classify(input: &str) -> PolyOutcome {
    let src = input.trim();
    if src.is_empty() {
        return PolyOutcome::EmptyInput;
    }
    match classify_expr(src) {
        Ok(outcome) => outcome,
        Err(_) => PolyOutcome::Failed,
    }
}

fn classify_expr(src: &str) -> Result<PolyOutcome> {
    let expr = parse_expr(src)?;

    let mut scope: Scope = Scope::new();
    scope.insert("x".to_string(), 0.0);

    let c = evaluate(&expr, &scope)?;
    let dp = differentiate("x", &expr);
    let b = evaluate(&dp, &scope)?;
    let d2p = differentiate("x", &dp);
    let a = evaluate(&d2p, &scope)? / 2.0;

    let model = QuadraticModel { a, b, c };
    if fit_error(&expr, &model)? > FIT_TOLERANCE {
        return Ok(PolyOutcome::UnsupportedDegree);
    }

    Ok(classify_model(&model))
}

/// Worst absolute disagreement between the expression and the fitted
/// quadratic over the sample points.
fn fit_error(expr: &crate::expr::Expr, model: &QuadraticModel) -> Result<f64> {
    let mut max_diff: f64 = 0.0;
    let mut scope = Scope::new();
    for s in SAMPLE_POINTS {
        scope.insert("x".to_string(), s);
        let true_val = evaluate(expr, &scope)?;
        let quad_val = model.a * s * s + model.b * s + model.c;
        max_diff = max_diff.max((true_val - quad_val).abs());
    }
    Ok(max_diff)
}

fn classify_model(model: &QuadraticModel) -> PolyOutcome {
    let QuadraticModel { a, b, c } = *model;

    if a.abs() < EPS && b.abs() < EPS {
        if c.abs() < EPS {
            return PolyOutcome::Identity;
        }
        return PolyOutcome::NoSolution;
    }

    if a.abs() < EPS {
        return PolyOutcome::Linear { x: -c / b };
    }

    let d = b * b - 4.0 * a * c;

    if d > EPS {
        let sqrt_d = d.sqrt();
        return PolyOutcome::TwoReal {
            x1: (-b + sqrt_d) / (2.0 * a),
            x2: (-b - sqrt_d) / (2.0 * a),
        };
    }

    if d.abs() <= EPS {
        return PolyOutcome::DoubleRoot { x: -b / (2.0 * a) };
    }

    PolyOutcome::Complex {
        re: -b / (2.0 * a),
        im: (-d).sqrt() / (2.0 * a.abs()),
    }
}
