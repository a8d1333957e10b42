use eqsolve::{Scope, SystemOutcome, evaluate, parse_expr, solve_system};

fn solved(lines: &[&str]) -> (Vec<String>, Vec<f64>) {
    match solve_system(lines) {
        SystemOutcome::Solved { variables, values } => (variables, values),
        other => panic!("expected a solution for {lines:?}, got {other:?}"),
    }
}

/// Substitute the reported values back into each original equation and check
/// both sides agree within 1e-6.
fn assert_satisfies(lines: &[&str], variables: &[String], values: &[f64]) {
    let scope: Scope = variables
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect();
    for line in lines {
        let (lhs, rhs) = line.split_once('=').unwrap_or((line, "0"));
        let lhs_val = evaluate(&parse_expr(lhs).expect("parse lhs"), &scope).expect("eval lhs");
        let rhs_val = evaluate(&parse_expr(rhs).expect("parse rhs"), &scope).expect("eval rhs");
        assert!(
            (lhs_val - rhs_val).abs() < 1e-6,
            "{line} not satisfied: {lhs_val} vs {rhs_val}"
        );
    }
}

#[test]
fn two_by_two_system() {
    let lines = ["2x + 3y = 5", "x - y = 1"];
    let (variables, values) = solved(&lines);
    assert_eq!(variables, vec!["x", "y"]);
    assert!((values[0] - 1.6).abs() < 1e-9);
    assert!((values[1] - 0.6).abs() < 1e-9);
    assert_satisfies(&lines, &variables, &values);
}

#[test]
fn variables_keep_first_seen_order() {
    let lines = ["y + x = 3", "y - x = 1"];
    let (variables, values) = solved(&lines);
    assert_eq!(variables, vec!["y", "x"]);
    assert!((values[0] - 2.0).abs() < 1e-9);
    assert!((values[1] - 1.0).abs() < 1e-9);
}

#[test]
fn four_unknowns() {
    let lines = ["x + y + z + t = 10", "x - y = 1", "y - z = 1", "z - t = 1"];
    let (variables, values) = solved(&lines);
    assert_eq!(variables, vec!["x", "y", "z", "t"]);
    let expected = [4.0, 3.0, 2.0, 1.0];
    for (got, want) in values.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9);
    }
    assert_satisfies(&lines, &variables, &values);
}

#[test]
fn line_without_equals_is_equated_to_zero() {
    let lines = ["x - 5"];
    let (variables, values) = solved(&lines);
    assert_eq!(variables, vec!["x"]);
    assert!((values[0] - 5.0).abs() < 1e-9);
}

#[test]
fn blank_input_is_reported_as_empty() {
    assert!(matches!(solve_system(&[]), SystemOutcome::EmptyInput));
    assert!(matches!(solve_system(&["  "]), SystemOutcome::EmptyInput));
    assert!(matches!(
        solve_system(&["", "   ", ""]),
        SystemOutcome::EmptyInput
    ));
}

#[test]
fn dimension_mismatch_reports_both_counts() {
    match solve_system(&["x + y = 3"]) {
        SystemOutcome::DimensionMismatch {
            equations,
            variables,
        } => {
            assert_eq!(equations, 1);
            assert_eq!(variables, 2);
        }
        other => panic!("expected dimension mismatch, got {other:?}"),
    }
}

#[test]
fn constant_equations_have_no_variables() {
    assert!(matches!(solve_system(&["1 + 2"]), SystemOutcome::NoVariables));
}

#[test]
fn singular_system_fails() {
    assert!(matches!(
        solve_system(&["x + y = 1", "x + y = 2"]),
        SystemOutcome::Failed
    ));
}

#[test]
fn parse_errors_fail() {
    assert!(matches!(solve_system(&["x ="]), SystemOutcome::Failed));
    // Extra '=' signs fold into the right-hand side, which then fails to parse.
    assert!(matches!(
        solve_system(&["x = 1 = 2"]),
        SystemOutcome::Failed
    ));
}

#[test]
fn other_identifiers_are_constants_not_unknowns() {
    // pi is a named constant; x is the only unknown.
    let lines = ["x + pi = 3"];
    let (variables, values) = solved(&lines);
    assert_eq!(variables, vec!["x"]);
    assert!((values[0] - (3.0 - std::f64::consts::PI)).abs() < 1e-9);
}
