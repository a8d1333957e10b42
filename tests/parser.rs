use eqsolve::{Expr, Scope, evaluate, parse_expr};

fn parsed(input: &str) -> Expr {
    parse_expr(input).expect("parse input")
}

#[test]
fn implicit_multiplication_matches_explicit() {
    assert_eq!(parsed("2x + 3y"), parsed("2*x + 3*y"));
    assert_eq!(parsed("5x^2"), parsed("5*x^2"));
    assert_eq!(parsed("3(x + 1)"), parsed("3*(x + 1)"));
    assert_eq!(parsed("x y"), parsed("x*y"));
    assert_eq!(parsed("2pi"), parsed("2*pi"));
}

#[test]
fn unary_minus_binds_looser_than_pow() {
    assert_eq!(parsed("-x^2"), parsed("-(x^2)"));
    let value = evaluate(&parsed("-2^2"), &Scope::new()).expect("evaluate");
    assert_eq!(value, -4.0);
}

#[test]
fn pow_is_right_associative() {
    let value = evaluate(&parsed("2^3^2"), &Scope::new()).expect("evaluate");
    assert_eq!(value, 512.0);
}

#[test]
fn negative_exponent() {
    let value = evaluate(&parsed("2^-1"), &Scope::new()).expect("evaluate");
    assert_eq!(value, 0.5);
}

#[test]
fn decimal_literals_become_exact_rationals() {
    assert_eq!(parsed("1.5"), Expr::constant(3, 2));
    assert_eq!(parsed("0.25"), Expr::constant(1, 4));
    assert_eq!(parsed("1.5x"), parsed("1.5 * x"));
}

#[test]
fn known_functions_and_constants() {
    assert!(matches!(parsed("sin(x)"), Expr::Sin(_)));
    assert!(matches!(parsed("sqrt(2)"), Expr::Sqrt(_)));
    assert_eq!(parsed("arctan(x)"), parsed("atan(x)"));
    assert_eq!(parsed("ln(x)"), parsed("log(x)"));

    let value = evaluate(&parsed("cos(pi)"), &Scope::new()).expect("evaluate");
    assert!((value + 1.0).abs() < 1e-12);
}

#[test]
fn rejects_malformed_input() {
    assert!(parse_expr("").is_err());
    assert!(parse_expr("2 +").is_err());
    assert!(parse_expr("(x + 1").is_err());
    assert!(parse_expr("1 = 2").is_err());
    assert!(parse_expr("2 3").is_err());
    // Unknown call target: `foo` is not a function.
    assert!(parse_expr("foo(3)").is_err());
}

#[test]
fn unknown_symbols_parse_but_do_not_evaluate() {
    let expr = parsed("a + 1");
    assert!(evaluate(&expr, &Scope::new()).is_err());

    let mut scope = Scope::new();
    scope.insert("a".to_string(), 2.0);
    assert_eq!(evaluate(&expr, &scope).expect("evaluate"), 3.0);
}
