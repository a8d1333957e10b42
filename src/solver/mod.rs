//! Linear system solving over the closed variable alphabet `{x, y, z, t}`.
//!
//! Equations arrive as raw text lines. Each line is rewritten into the
//! canonical `expression = 0` form, the referenced unknowns are collected in
//! first-seen order, the coefficient matrix is recovered by evaluating
//! symbolic partial derivatives at the origin, and the square system is
//! solved by LU decomposition with partial pivoting.

use crate::calculus::differentiate;
use crate::error::{EqError, Result};
use crate::eval::{Scope, evaluate};
use crate::expr::Expr;
use crate::parser::parse_expr;

/// The only symbols recognized as unknowns; anything else is a named
/// constant as far as the solver is concerned.
pub const CANDIDATE_VARS: [&str; 4] = ["x", "y", "z", "t"];

#[derive(Debug, Clone)]
pub enum SystemOutcome {
    EmptyInput,
    NoVariables,
    DimensionMismatch { equations: usize, variables: usize },
    Solved { variables: Vec<String>, values: Vec<f64> },
    Failed,
}

pub fn solve_system(lines: &[&str]) -> SystemOutcome {
    let raw: Vec<&str> = lines.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
    if raw.is_empty() {
        return SystemOutcome::EmptyInput;
    }
    match solve_raw(&raw) {
        Ok(outcome) => outcome,
        Err(_) => SystemOutcome::Failed,
    }
}

fn solve_raw(raw: &[&str]) -> Result<SystemOutcome> {
    let equations: Vec<Expr> = raw.iter().map(|line| canonicalize(line)).collect::<Result<_>>()?;

    let variables = detect_variables(&equations);
    if variables.is_empty() {
        return Ok(SystemOutcome::NoVariables);
    }
    if variables.len() != equations.len() {
        return Ok(SystemOutcome::DimensionMismatch {
            equations: equations.len(),
            variables: variables.len(),
        });
    }

    let zero_scope: Scope = variables.iter().map(|v| (v.clone(), 0.0)).collect();

    let n = variables.len();
    let mut a = Matrix::zeroed(n, n);
    let mut b = vec![0.0; n];
    for (i, eq) in equations.iter().enumerate() {
        for (j, var) in variables.iter().enumerate() {
            let d = differentiate(var, eq);
            *a.get_mut(i, j) = evaluate(&d, &zero_scope)?;
        }
        // Ax + c = 0, so the right-hand side is -c.
        b[i] = -evaluate(eq, &zero_scope)?;
    }

    let values = lu_solve(a, b)?;
    Ok(SystemOutcome::Solved { variables, values })
}

/// Rewrite one equation line as an expression equal to zero. Only the first
/// `=` splits the sides; any further `=` stays in the right-hand side text
/// (and fails to parse there, which the caller folds into the generic
/// failure report).
fn canonicalize(line: &str) -> Result<Expr> {
    match line.split_once('=') {
        Some((lhs, rhs)) => Ok(Expr::Sub(parse_expr(lhs)?.boxed(), parse_expr(rhs)?.boxed())),
        None => parse_expr(line),
    }
}

/// Collect the candidate symbols referenced anywhere in the system, in
/// first-seen pre-order scan order. The order decides both matrix column
/// layout and report line ordering, so it must never be sorted.
fn detect_variables(equations: &[Expr]) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for eq in equations {
        scan_symbols(eq, &mut vars);
    }
    vars
}

fn scan_symbols(expr: &Expr, vars: &mut Vec<String>) {
    match expr {
        Expr::Variable(name) => {
            if CANDIDATE_VARS.contains(&name.as_str()) && !vars.iter().any(|v| v == name) {
                vars.push(name.clone());
            }
        }
        Expr::Constant(_) => {}
        Expr::Add(a, b)
        | Expr::Sub(a, b)
        | Expr::Mul(a, b)
        | Expr::Div(a, b)
        | Expr::Pow(a, b) => {
            scan_symbols(a, vars);
            scan_symbols(b, vars);
        }
        Expr::Neg(a)
        | Expr::Sin(a)
        | Expr::Cos(a)
        | Expr::Tan(a)
        | Expr::Asin(a)
        | Expr::Acos(a)
        | Expr::Atan(a)
        | Expr::Sqrt(a)
        | Expr::Exp(a)
        | Expr::Log(a)
        | Expr::Abs(a) => scan_symbols(a, vars),
    }
}

/// Solve `Ax = b` by LU decomposition with partial pivoting, in place.
fn lu_solve(mut a: Matrix, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = a.rows;
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_abs = a.get(col, col).abs();
        for r in (col + 1)..n {
            let candidate = a.get(r, col).abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = r;
            }
        }
        if pivot_abs == 0.0 {
            return Err(EqError::Singular);
        }
        if pivot_row != col {
            a.swap_rows(col, pivot_row);
            b.swap(col, pivot_row);
        }

        let pivot = a.get(col, col);
        for r in (col + 1)..n {
            let factor = a.get(r, col) / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                let upper = a.get(col, c);
                *a.get_mut(r, c) -= factor * upper;
            }
            b[r] -= factor * b[col];
        }
    }

    // Back substitution on the upper-triangular system.
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for c in (row + 1)..n {
            acc -= a.get(row, c) * x[c];
        }
        x[row] = acc / a.get(row, row);
    }
    Ok(x)
}

struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.idx(row, col)]
    }

    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let start_a = a * cols;
        let start_b = b * cols;
        for offset in 0..cols {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }
}
