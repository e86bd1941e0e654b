//! Arithmetic expression evaluation in two steps: infix is reordered into
//! postfix with the shunting-yard algorithm, then the postfix tokens are
//! folded over an operand stack.
//!
//! ```
//! assert_eq!(rpncalc::convert("(2+3)*4"), Ok(format!("2 3 + 4 * ")));
//! assert_eq!(rpncalc::evaluate("2 3 + 4 * "), Ok(20.0));
//! assert_eq!(rpncalc::calc("2^3^2"), Ok(512.0));
//! ```
extern crate lexers;

pub use errors::CalcError;
pub use parser::{precedence, Assoc, RPNExpr, ShuntingParser};
pub use rpneval::{evaluate, evaluate_tokens};

mod errors;
mod parser;

mod rpneval;
#[cfg(test)]
mod rpneval_test;

mod rpnprint;


/// Convert an infix expression to its RPN string, e.g. `"2+3"` to `"2 3 + "`.
pub fn convert(expression: &str) -> Result<String, CalcError> {
    Ok(ShuntingParser::parse_str(expression)?.to_string())
}

pub fn calc(expression: &str) -> Result<f64, CalcError> {
    let rpn = convert(expression)?;
    evaluate(&rpn)
}
