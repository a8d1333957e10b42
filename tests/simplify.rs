use eqsolve::{parse_expr, simplify_fully, ui};

fn simp(input: &str) -> String {
    ui::simp(input).expect("simplify input")
}

#[test]
fn constant_folding() {
    assert_eq!(simp("2+2"), "4");
    assert_eq!(simp("2*x*3"), "6*x");
    assert_eq!(simp("1/2 + 1/3"), "5/6");
    assert_eq!(simp("2^10"), "1024");
}

#[test]
fn identities() {
    assert_eq!(simp("x*1"), "x");
    assert_eq!(simp("x + 0"), "x");
    assert_eq!(simp("0*x + 5"), "5");
    assert_eq!(simp("x^1"), "x");
    assert_eq!(simp("x^0"), "1");
    assert_eq!(simp("x/x"), "1");
}

#[test]
fn term_collection() {
    assert_eq!(simp("x + x"), "2*x");
    assert_eq!(simp("x - x"), "0");
    assert_eq!(simp("2*x + 3 + x"), "3*x+3");
}

#[test]
fn function_rules() {
    assert_eq!(simp("sin(0)"), "0");
    assert_eq!(simp("cos(0)"), "1");
    assert_eq!(simp("tan(0)"), "0");
    assert_eq!(simp("exp(0)"), "1");
    assert_eq!(simp("log(1)"), "0");
    assert_eq!(simp("exp(log(x))"), "x");
    assert_eq!(simp("log(exp(x))"), "x");
    assert_eq!(simp("abs(-3)"), "3");
}

#[test]
fn sqrt_of_perfect_squares() {
    assert_eq!(simp("sqrt(0)"), "0");
    assert_eq!(simp("sqrt(4)"), "2");
    assert_eq!(simp("sqrt(9/4)"), "3/2");
    assert_eq!(simp("sqrt(2)"), "sqrt(2)");
}

#[test]
fn decimals_fold_as_rationals() {
    assert_eq!(simp("1.5x"), "3/2*x");
    assert_eq!(simp("0.5 + 0.25"), "3/4");
}

#[test]
fn simplification_is_idempotent() {
    for input in ["2+2", "x + x", "sin(x)^2 + cos(x)^2", "x^2 - 5x + 6"] {
        let once = simplify_fully(parse_expr(input).expect("parse"));
        let twice = simplify_fully(once.clone());
        assert_eq!(once, twice, "simplify not idempotent for {input}");
    }
}
