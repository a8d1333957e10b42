use eqsolve::{PolyOutcome, classify};

#[test]
fn two_distinct_real_roots_plus_root_first() {
    match classify("x^2 - 5x + 6") {
        PolyOutcome::TwoReal { x1, x2 } => {
            assert!((x1 - 3.0).abs() < 1e-9);
            assert!((x2 - 2.0).abs() < 1e-9);
        }
        other => panic!("expected two real roots, got {other:?}"),
    }
}

#[test]
fn factored_quadratic_via_implicit_multiplication() {
    match classify("(x - 1)(x - 2)") {
        PolyOutcome::TwoReal { x1, x2 } => {
            assert!((x1 - 2.0).abs() < 1e-9);
            assert!((x2 - 1.0).abs() < 1e-9);
        }
        other => panic!("expected two real roots, got {other:?}"),
    }
}

#[test]
fn complex_conjugate_pair() {
    match classify("x^2 + 1") {
        PolyOutcome::Complex { re, im } => {
            assert!(re.abs() < 1e-12);
            assert!((im - 1.0).abs() < 1e-9);
        }
        other => panic!("expected complex roots, got {other:?}"),
    }
}

#[test]
fn double_root() {
    match classify("x^2 - 2x + 1") {
        PolyOutcome::DoubleRoot { x } => assert!((x - 1.0).abs() < 1e-9),
        other => panic!("expected a double root, got {other:?}"),
    }
}

#[test]
fn linear_equation() {
    match classify("2x + 4") {
        PolyOutcome::Linear { x } => assert!((x + 2.0).abs() < 1e-9),
        other => panic!("expected a linear solution, got {other:?}"),
    }
}

#[test]
fn constant_cases() {
    assert!(matches!(classify("7"), PolyOutcome::NoSolution));
    assert!(matches!(classify("0"), PolyOutcome::Identity));
    assert!(matches!(classify("x - x"), PolyOutcome::Identity));
}

#[test]
fn higher_degree_is_rejected_by_the_fit_check() {
    assert!(matches!(classify("x^3"), PolyOutcome::UnsupportedDegree));
    assert!(matches!(
        classify("x^4 + x^2"),
        PolyOutcome::UnsupportedDegree
    ));
}

#[test]
fn non_polynomial_is_rejected_by_the_fit_check() {
    assert!(matches!(classify("sin(x)"), PolyOutcome::UnsupportedDegree));
    assert!(matches!(classify("exp(x)"), PolyOutcome::UnsupportedDegree));
}

#[test]
fn empty_and_malformed_input() {
    assert!(matches!(classify(""), PolyOutcome::EmptyInput));
    assert!(matches!(classify("   "), PolyOutcome::EmptyInput));
    assert!(matches!(classify("x +"), PolyOutcome::Failed));
}

#[test]
fn roots_satisfy_the_equation() {
    if let PolyOutcome::TwoReal { x1, x2 } = classify("2x^2 - 3x - 5") {
        for root in [x1, x2] {
            let residual = 2.0 * root * root - 3.0 * root - 5.0;
            assert!(residual.abs() < 1e-6, "residual {residual} at {root}");
        }
    } else {
        panic!("expected two real roots");
    }
}
