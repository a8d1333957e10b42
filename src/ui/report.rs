use crate::format::fmt_number;
use crate::polynomial::PolyOutcome;
use crate::solver::SystemOutcome;

/// Render a linear-system outcome into the report shown to the user.
pub fn render_system(outcome: &SystemOutcome) -> String {
    match outcome {
        SystemOutcome::EmptyInput => {
            "Enter at least one equation (e.g. 2x + 3y = 5).".to_string()
        }
        SystemOutcome::NoVariables => {
            "No variables (x, y, z, t) detected in the system.".to_string()
        }
        SystemOutcome::DimensionMismatch {
            equations,
            variables,
        } => format!(
            "Need same number of independent equations and variables.\nEquations: {equations}\nVariables: {variables}"
        ),
        SystemOutcome::Solved { variables, values } => variables
            .iter()
            .zip(values.iter())
            .map(|(var, value)| format!("{var} = {}", fmt_number(*value)))
            .collect::<Vec<_>>()
            .join("\n"),
        SystemOutcome::Failed => {
            "Unable to solve system. Check syntax (e.g. \"2x + 3y = 5\", \"x - y = 1\").".to_string()
        }
    }
}

/// Render a polynomial outcome into the report shown to the user.
pub fn render_polynomial(outcome: &PolyOutcome) -> String {
    match outcome {
        PolyOutcome::EmptyInput => "Enter a polynomial in x (e.g. x^2 + 3x + 2).".to_string(),
        PolyOutcome::UnsupportedDegree => {
            "Polynomial solver currently supports polynomials in x up to degree 2.".to_string()
        }
        PolyOutcome::Identity => "Identity 0 = 0 → infinitely many solutions.".to_string(),
        PolyOutcome::NoSolution => {
            "No solution (equation reduces to a non-zero constant).".to_string()
        }
        PolyOutcome::Linear { x } => format!("Linear equation\nx = {}", fmt_number(*x)),
        PolyOutcome::TwoReal { x1, x2 } => format!(
            "Two distinct real roots:\n x₁ = {}\n x₂ = {}",
            fmt_number(*x1),
            fmt_number(*x2)
        ),
        PolyOutcome::DoubleRoot { x } => {
            format!("One real double root:\n x = {}", fmt_number(*x))
        }
        PolyOutcome::Complex { re, im } => {
            let re = fmt_number(*re);
            let im = fmt_number(*im);
            format!("Complex roots:\n x₁ = {re} + {im}i\n x₂ = {re} - {im}i")
        }
        PolyOutcome::Failed => {
            "Error parsing polynomial. Use variable x (e.g. x^2 + 3x + 2).".to_string()
        }
    }
}
