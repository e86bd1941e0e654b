#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ARITH_OPS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];

// scan unsigned numbers like [0-9]+(\.[0-9]+)?
pub fn scan_number<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    // require integer part
    if !scanner.skip_all(DIGITS) {
        scanner.set_pos(backtrack);
        return None;
    }
    // check for fractional part, else it's just an integer
    let backtrack = scanner.pos();
    if scanner.accept(&'.').is_some() && !scanner.skip_all(DIGITS) {
        scanner.set_pos(backtrack);
    }
    Some(scanner.extract_string())
}

pub fn scan_arith_op<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    scanner.accept_any(ARITH_OPS)?;
    Some(scanner.extract_string())
}

/// Parse a whole string as a numeric literal `[+-]?[0-9]+(\.[0-9]+)?`.
///
/// Unlike `str::parse::<f64>` this rejects `inf`, `NaN`, exponents,
/// anything with trailing garbage and literals too large to be finite.
pub fn parse_number(text: &str) -> Option<f64> {
    let mut scanner = Scanner::new(text.chars());
    let signed = scanner.accept_any(&['+', '-']).is_some();
    let digits = scan_number(&mut scanner)?;
    if scanner.peek().is_some() {
        return None;
    }
    let literal = if signed { text } else { digits.as_str() };
    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}
