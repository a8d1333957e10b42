//! Formatting helpers for rendering expressions and report numbers.

pub mod expr;
pub mod number;

pub use expr::pretty;
pub use number::fmt_number;
