//! Symbolic differentiation.

mod differentiate;

pub use differentiate::differentiate;
