use crate::errors::CalcError;
use lexers::{ArithToken, ArithTokenizer};
use std::fmt;
use std::ops::Deref;
use tracing::{debug, trace};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
    None,
}

pub fn precedence(token: &ArithToken) -> (usize, Assoc) {
    // '^' binds tighter than the rest and groups to the right, so 2^3^2 is
    // 2^(3^2). A '-' glued to a number never reaches here, the tokenizer
    // folds it into the literal, which makes -2^2 read as (-2)^2.
    match *token {
        ArithToken::OParen => (0, Assoc::Left), // keep at bottom
        ArithToken::BOp(ref o) if o == "+" => (1, Assoc::Left),
        ArithToken::BOp(ref o) if o == "-" => (1, Assoc::Left),
        ArithToken::BOp(ref o) if o == "*" => (2, Assoc::Left),
        ArithToken::BOp(ref o) if o == "/" => (2, Assoc::Left),
        ArithToken::BOp(ref o) if o == "^" => (3, Assoc::Right),
        _ => (99, Assoc::None),
    }
}

/// An expression in postfix order: numbers and operators, no parentheses.
///
/// `Display` renders the space separated form consumed by
/// [`evaluate`](crate::evaluate), with a space after every token.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<ArithToken>);

impl Deref for RPNExpr {
    type Target = [ArithToken];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.0.iter() {
            write!(f, "{} ", token)?;
        }
        Ok(())
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, CalcError> {
        debug!(expr, "converting to rpn");
        Self::parse(ArithTokenizer::new(expr.chars()))
    }

    /// Reorder positioned infix tokens into postfix.
    ///
    /// Operator count mismatches (`2++3`) go through untouched, they only
    /// show up once the result is evaluated.
    pub fn parse(
        lex: impl IntoIterator<Item = (usize, ArithToken)>,
    ) -> Result<RPNExpr, CalcError> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, ArithToken)> = Vec::new();

        for (pos, token) in lex {
            match token {
                ArithToken::Number(_) => out.push(token),
                ArithToken::OParen => stack.push((pos, token)),
                ArithToken::CParen => loop {
                    match stack.pop() {
                        Some((_, ArithToken::OParen)) => break,
                        Some((_, op)) => out.push(op),
                        None => return Err(CalcError::UnbalancedParentheses { position: pos }),
                    }
                },
                ArithToken::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while let Some((_, top)) = stack.last() {
                        let (prec_lhs, _) = precedence(top);
                        let pop = if prec_lhs < prec_rhs {
                            false
                        } else if prec_lhs > prec_rhs {
                            true
                        } else {
                            assoc_rhs == Assoc::Left
                        };
                        if !pop {
                            break;
                        }
                        if let Some((_, op)) = stack.pop() {
                            trace!(op = %op, "popped to output");
                            out.push(op);
                        }
                    }
                    stack.push((pos, token));
                }
                ArithToken::Unknown(lexeme) => {
                    return Err(CalcError::InvalidToken {
                        token: lexeme,
                        position: pos,
                    })
                }
            }
        }
        while let Some((pos, top)) = stack.pop() {
            match top {
                ArithToken::OParen => {
                    return Err(CalcError::UnbalancedParentheses { position: pos })
                }
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
