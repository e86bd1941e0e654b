use crate::parser::{precedence, Assoc, RPNExpr};
use lexers::ArithToken;

impl RPNExpr {
    /// Render back to infix with only the parentheses precedence requires.
    ///
    /// Folds the tokens over a stack of rendered subexpressions, so deep
    /// expressions don't grow the call stack. None if the tokens don't
    /// reduce to exactly one expression.
    pub fn to_infix(&self) -> Option<String> {
        let mut stack: Vec<(String, (usize, Assoc))> = Vec::new();
        for token in self.0.iter() {
            match *token {
                ArithToken::Number(_) => stack.push((token.to_string(), precedence(token))),
                ArithToken::BOp(ref op) => {
                    let rhs = stack.pop()?;
                    let lhs = stack.pop()?;
                    let (prec, assoc) = precedence(token);

                    // extend the lhs in place, long left-leaning chains stay linear
                    let mut text = if prec > (lhs.1).0 || (prec == (lhs.1).0 && assoc != Assoc::Left) {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    text.push(' ');
                    text.push_str(op);
                    text.push(' ');
                    // NOTE: '2+(3+4)' will show parens to indicate that user
                    // explicitly put them there
                    if prec > (rhs.1).0 || (prec == (rhs.1).0 && assoc != Assoc::Right) {
                        text.push('(');
                        text.push_str(&rhs.0);
                        text.push(')');
                    } else {
                        text.push_str(&rhs.0);
                    }
                    stack.push((text, (prec, assoc)));
                }
                _ => return None,
            }
        }
        let (root, _) = stack.pop()?;
        if stack.is_empty() {
            Some(root)
        } else {
            None
        }
    }
}
