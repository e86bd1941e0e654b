#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;
use std::fmt;


#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Unknown(String),
    Number(f64),
    BOp(String),
    OParen, CParen,
}

impl fmt::Display for ArithToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArithToken::Number(n) => write!(f, "{}", n),
            ArithToken::BOp(ref op) => write!(f, "{}", op),
            ArithToken::Unknown(ref lexeme) => write!(f, "{}", lexeme),
            ArithToken::OParen => write!(f, "("),
            ArithToken::CParen => write!(f, ")"),
        }
    }
}

/// Splits arithmetic expressions into tokens, each paired with the char
/// offset where it starts.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<ArithToken>
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source), prev: None}
    }

    // a '-' glued to a digit is a sign unless it follows an operand
    fn allows_sign(prev: &Option<ArithToken>) -> bool {
        match *prev {
            Some(ArithToken::Number(_)) => false,
            Some(ArithToken::CParen) => false,
            Some(ArithToken::Unknown(_)) => false,
            _ => true
        }
    }

    fn scan_signed_number(&mut self) -> Option<String> {
        let backtrack = self.src.pos();
        if Self::allows_sign(&self.prev) {
            self.src.accept(&'-');
        }
        let num = helpers::scan_number(&mut self.src);
        if num.is_none() {
            self.src.set_pos(backtrack);
        }
        num
    }

    fn get_token(&mut self) -> Option<(usize, ArithToken)> {
        self.src.ignore_ws(); // discard whatever came before + and spaces
        let offset = self.src.offset();
        let token = if let Some(num) = self.scan_signed_number() {
            // digits too long for an f64 would otherwise turn into inf
            match num.parse::<f64>() {
                Ok(n) if n.is_finite() => ArithToken::Number(n),
                _ => ArithToken::Unknown(num),
            }
        } else if let Some(op) = helpers::scan_arith_op(&mut self.src) {
            match op.as_ref() {
                "(" => ArithToken::OParen,
                ")" => ArithToken::CParen,
                _ => ArithToken::BOp(op),
            }
        } else if self.src.next().is_some() {
            ArithToken::Unknown(self.src.extract_string())
        } else {
            return None;
        };
        Some((offset, token))
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = (usize, ArithToken);
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.as_ref().map(|(_, t)| t.clone());
        token
    }
}
