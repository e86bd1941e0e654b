use crate::errors::CalcError;
use tracing::{debug, trace};

/// Evaluate a space separated RPN string such as `"2 3 + 4 * "`.
///
/// Empty tokens left by repeated or trailing spaces are skipped. Token
/// positions in errors index the split sequence, empties included.
pub fn evaluate(rpn: &str) -> Result<f64, CalcError> {
    let result = evaluate_tokens(rpn.split(' '));
    debug!(rpn, ?result, "evaluated rpn");
    result
}

pub fn evaluate_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<f64, CalcError> {
    let mut operands: Vec<f64> = Vec::new();
    let mut scanned = 0;

    for (position, token) in tokens.into_iter().enumerate() {
        scanned = position + 1;
        match token {
            "" => continue,
            "+" | "-" | "*" | "/" | "^" => {
                let underflow = CalcError::StackUnderflow {
                    position,
                    needed: 2,
                    found: operands.len(),
                };
                let r = operands.pop().ok_or_else(|| underflow.clone())?;
                let l = operands.pop().ok_or(underflow)?;
                let value = apply(token, l, r, position)?;
                trace!(l, op = token, r, value, "applied operator");
                operands.push(value);
            }
            _ => match lexers::parse_number(token) {
                Some(num) => operands.push(num),
                None => {
                    return Err(CalcError::InvalidToken {
                        token: token.to_string(),
                        position,
                    })
                }
            },
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        rest => Err(CalcError::StackUnderflow {
            position: scanned,
            needed: 1,
            found: rest.len(),
        }),
    }
}

fn apply(op: &str, l: f64, r: f64, position: usize) -> Result<f64, CalcError> {
    match op {
        "+" => Ok(l + r),
        "-" => Ok(l - r),
        "*" => Ok(l * r),
        "/" if r == 0.0 => Err(CalcError::DivisionByZero { position }),
        "/" => Ok(l / r),
        "^" => Ok(l.powf(r)),
        _ => Err(CalcError::InvalidToken {
            token: op.to_string(),
            position,
        }),
    }
}
