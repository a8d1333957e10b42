use crate::error::{EqError, Result};
use crate::expr::{Expr, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map, peek, recognize};
use nom::error::{ErrorKind, ParseError, VerboseError};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded, tuple};
use num_bigint::BigInt;
use num_traits::Num;

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(EqError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            '-' => Expr::Sub(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        alt((
            pair(ws(alt((char('*'), char('/')))), parse_unary),
            map(parse_implicit_factor, |rhs| ('*', rhs)),
        )),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            '/' => Expr::Div(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

/// Implicit multiplication: a factor juxtaposed without an operator, as in
/// `2x`, `5x^2`, `3(x + 1)`, or `x y`. Only factors opening with a letter or
/// parenthesis qualify, so `2 3` and `x -y` stay syntax errors.
fn parse_implicit_factor(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (_, _) = peek(preceded(
        multispace0,
        satisfy(|c| c.is_ascii_alphabetic() || c == '('),
    ))(input)?;
    parse_pow(input)
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_pow(input)
    }
}

fn parse_pow(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, base) = parse_atom(input)?;
    // Right-associative; the exponent may carry its own sign, e.g. x^-2.
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_unary)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_atom(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, parse_number, parse_name))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(
        ws(alt((
            recognize(tuple((digit1, char('.'), digit1))),
            recognize(digit1),
        ))),
        |s: &str| Expr::Constant(decimal_to_rational(s)),
    )(input)
}

fn parse_name(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, name) = ws(recognize(pair(alpha1, alphanumeric0)))(input)?;
    match delimited(ws(char('(')), parse_add_sub, ws(char(')')))(rest) {
        Ok((next, arg)) => match function_node(name, arg) {
            Some(expr) => Ok((next, expr)),
            None => Err(nom::Err::Error(VerboseError::from_error_kind(
                input,
                ErrorKind::Tag,
            ))),
        },
        // Bare identifier: a variable or named constant such as pi.
        Err(_) => Ok((rest, Expr::Variable(name.to_string()))),
    }
}

fn function_node(name: &str, arg: Expr) -> Option<Expr> {
    let expr = match name {
        "sin" => Expr::Sin(arg.boxed()),
        "cos" => Expr::Cos(arg.boxed()),
        "tan" => Expr::Tan(arg.boxed()),
        "asin" | "arcsin" => Expr::Asin(arg.boxed()),
        "acos" | "arccos" => Expr::Acos(arg.boxed()),
        "atan" | "arctan" => Expr::Atan(arg.boxed()),
        "sqrt" => Expr::Sqrt(arg.boxed()),
        "exp" => Expr::Exp(arg.boxed()),
        "log" | "ln" => Expr::Log(arg.boxed()),
        "abs" => Expr::Abs(arg.boxed()),
        _ => return None,
    };
    Some(expr)
}

fn decimal_to_rational(text: &str) -> Rational {
    match text.split_once('.') {
        Some((whole, frac)) => {
            let digits: String = format!("{whole}{frac}");
            let numer = BigInt::from_str_radix(&digits, 10).unwrap();
            let denom = BigInt::from(10u32).pow(frac.len() as u32);
            Rational::new(numer, denom)
        }
        None => Rational::from_integer(BigInt::from_str_radix(text, 10).unwrap()),
    }
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
