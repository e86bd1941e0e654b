use crate::errors::CalcError;
use crate::parser::ShuntingParser;
use crate::rpneval::{evaluate, evaluate_tokens};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    let expr = ShuntingParser::parse_str("3+4*2/(1-5)^2^3").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    let expr = ShuntingParser::parse_str("(2+3)*4").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 20.0);
}

#[test]
fn test_eval3() {
    let expr = ShuntingParser::parse_str("(-(1-9^2) / (1 + 6^2))^0.5");
    // unary minus only attaches to literals
    assert!(expr.is_err() || evaluate(&expr.unwrap().to_string()).is_err());
    let expr = ShuntingParser::parse_str("((0-1)*(1-9^2) / (1 + 6^2))^0.5").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 1.470429244187615496759);
}

#[test]
fn test_eval4() {
    let expr = ShuntingParser::parse_str("2^3").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 8.0);
    let expr = ShuntingParser::parse_str("2^-3").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 0.125);
    let expr = ShuntingParser::parse_str("-2^3").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), -8.0);
    let expr = ShuntingParser::parse_str("-2^2").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), 4.0);
    let expr = ShuntingParser::parse_str("-2^-3").unwrap();
    fuzzy_eq!(evaluate(&expr.to_string()).unwrap(), -0.125);
}

#[test]
fn rpn_strings() {
    let cases = [
        ("2 3 + ", 5.0),
        ("5 2 - ", 3.0),
        ("4 3 * ", 12.0),
        ("8 2 / ", 4.0),
        ("2 3 4 * + ", 14.0),
        ("2 3 + 4 * ", 20.0),
        ("2 3 ^ ", 8.0),
        ("10 2 + 2 * 4 - 4 / ", 5.0),
        ("4 ", 4.0),
        ("4", 4.0),
        ("  4   2  /  ", 2.0),
        ("-1 -2 - ", 1.0),
        ("+3 1 - ", 2.0),
    ];
    for (rpn, expected) in cases.iter() {
        assert_eq!(evaluate(rpn), Ok(*expected), "evaluating {:?}", rpn);
    }
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate("8 0 / "), Err(CalcError::DivisionByZero { position: 2 }));
    assert_eq!(evaluate("8 -0 / "), Err(CalcError::DivisionByZero { position: 2 }));
    assert_eq!(evaluate("1 2 2 - / "), Err(CalcError::DivisionByZero { position: 4 }));
    // only '/' cares about zero
    assert_eq!(evaluate("0 0 ^ "), Ok(1.0));
    assert_eq!(evaluate("0 3 * "), Ok(0.0));
}

#[test]
fn stack_underflow() {
    assert_eq!(
        evaluate(""),
        Err(CalcError::StackUnderflow { position: 1, needed: 1, found: 0 })
    );
    assert_eq!(
        evaluate("2 + "),
        Err(CalcError::StackUnderflow { position: 1, needed: 2, found: 1 })
    );
    assert_eq!(
        evaluate("2 3 4 + - - "),
        Err(CalcError::StackUnderflow { position: 5, needed: 2, found: 1 })
    );
    assert_eq!(
        evaluate("+ "),
        Err(CalcError::StackUnderflow { position: 0, needed: 2, found: 0 })
    );
    assert_eq!(
        evaluate("1 2 "),
        Err(CalcError::StackUnderflow { position: 3, needed: 1, found: 2 })
    );
}

#[test]
fn invalid_tokens() {
    assert_eq!(
        evaluate("2 a + "),
        Err(CalcError::InvalidToken { token: format!("a"), position: 1 })
    );
    assert_eq!(
        evaluate("inf 1 + "),
        Err(CalcError::InvalidToken { token: format!("inf"), position: 0 })
    );
    assert_eq!(
        evaluate("1 NaN + "),
        Err(CalcError::InvalidToken { token: format!("NaN"), position: 1 })
    );
    assert_eq!(
        evaluate("2.3.2 3 + "),
        Err(CalcError::InvalidToken { token: format!("2.3.2"), position: 0 })
    );
    assert_eq!(
        evaluate("2 3 % "),
        Err(CalcError::InvalidToken { token: format!("%"), position: 2 })
    );
}

#[test]
fn token_sequences() {
    assert_eq!(evaluate_tokens(vec!["2", "3", "^"]), Ok(8.0));
    assert_eq!(evaluate_tokens(["1", "", "", "2", "+"]), Ok(3.0));
    assert_eq!(
        evaluate_tokens(Vec::<&str>::new()),
        Err(CalcError::StackUnderflow { position: 0, needed: 1, found: 0 })
    );
}
