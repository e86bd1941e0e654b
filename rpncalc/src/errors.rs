use thiserror::Error;

/// Everything that can go wrong turning an expression into a number.
///
/// Positions are char offsets into the infix expression for errors raised
/// while converting, and token indexes into the space-split RPN string for
/// errors raised while evaluating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero at token {position}")]
    DivisionByZero { position: usize },

    #[error("stack underflow at token {position}: needed {needed} operand(s), found {found}")]
    StackUnderflow {
        position: usize,
        needed: usize,
        found: usize,
    },

    #[error("invalid token '{token}' at {position}")]
    InvalidToken { token: String, position: usize },

    #[error("unbalanced parenthesis at {position}")]
    UnbalancedParentheses { position: usize },
}
