//! Equation-solving core for a calculator suite: linear systems in the
//! unknowns x, y, z, t; linear/quadratic polynomial equations in x; and
//! general expression simplification with optional numeric evaluation.

pub mod calculus;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod simplify;
pub mod solver;
pub mod ui;

pub use calculus::differentiate;
pub use error::{EqError, Result};
pub use eval::{Scope, evaluate};
pub use expr::{Expr, Rational, add, div, mul, neg, one, pow, rational, sub, zero};
pub use format::{fmt_number, pretty};
pub use parser::parse_expr;
pub use polynomial::{PolyOutcome, QuadraticModel, classify};
pub use simplify::{simplify, simplify_fully, simplify_with_limit};
pub use solver::{CANDIDATE_VARS, SystemOutcome, solve_system};
pub use ui::{simplify_expression, solve_linear_system, solve_polynomial};
