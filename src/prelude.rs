//! String-based convenience API for quick experimentation.

pub use crate::ui::{diff, simp, simplify_expression, solve_linear_system, solve_polynomial};
