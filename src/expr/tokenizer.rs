//! Cursor-based lexer. Longest-match first: `**` before `*`, a whole number
//! or identifier run before any single-character rule.

use crate::error::SyntaxError;
use crate::expr::{Op, Token};

/// Identifier prefix stripped for compatibility with formulas written in
/// member-access notation: `Math.sqrt(x)` tokenizes the same as `sqrt(x)`.
const RESERVED_NAMESPACE: &str = "Math";

/// Converts a formula string into a flat token sequence.
///
/// Fails with [`SyntaxError`] on any character outside the fixed alphabet;
/// no character is ever silently skipped except whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = Lexer {
        input: source,
        pos: 0,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Lexer<'input> {
    fn rest(&self) -> &'input str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let skipped: usize = self
            .rest()
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.pos += skipped;
    }

    fn next_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        self.skip_whitespace();
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };

        if c.is_ascii_digit() || c == '.' {
            return self.take_number().map(Some);
        }
        if c.is_alphabetic() || c == '_' {
            return self.take_identifier().map(Some);
        }

        self.pos += c.len_utf8();
        let op = match c {
            '+' => Op::Plus,
            '-' => Op::Minus,
            '*' => {
                if self.rest().starts_with('*') {
                    self.pos += 1;
                    Op::Pow
                } else {
                    Op::Star
                }
            }
            '/' => Op::Slash,
            '%' => Op::Percent,
            '(' => Op::LParen,
            ')' => Op::RParen,
            ',' => Op::Comma,
            '^' => return Err(SyntaxError::CaretExponent),
            _ => return Err(SyntaxError::UnexpectedCharacter(c)),
        };
        Ok(Some(Token::Operator(op)))
    }

    /// Number run: digits and decimal points, optionally followed by an
    /// exponent suffix (`e`/`E`, optional sign, digits). Malformed runs fail
    /// here rather than surfacing later as a bogus value.
    fn take_number(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let n = bytes.len();

        while self.pos < n && (bytes[self.pos].is_ascii_digit() || bytes[self.pos] == b'.') {
            self.pos += 1;
        }
        if self.pos < n && (bytes[self.pos] == b'e' || bytes[self.pos] == b'E') {
            self.pos += 1;
            if self.pos < n && (bytes[self.pos] == b'+' || bytes[self.pos] == b'-') {
                self.pos += 1;
            }
            if self.pos >= n || !bytes[self.pos].is_ascii_digit() {
                // Trailing `e` or `e+` with no digits.
                let raw = &self.input[start..self.pos];
                return Err(SyntaxError::InvalidNumber(raw.to_string()));
            }
            while self.pos < n && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }

        let raw = &self.input[start..self.pos];
        if raw.ends_with('.') {
            return Err(SyntaxError::InvalidNumber(raw.to_string()));
        }
        match raw.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(Token::Number(value)),
            _ => Err(SyntaxError::InvalidNumber(raw.to_string())),
        }
    }

    /// Identifier run: letters, digits, underscore. The reserved `Math.`
    /// prefix is consumed and the member name replaces it.
    fn take_identifier(&mut self) -> Result<Token, SyntaxError> {
        let name = self.take_identifier_run();
        if name == RESERVED_NAMESPACE && self.peek_char() == Some('.') {
            self.pos += 1;
            let member = self.take_identifier_run();
            if member.is_empty() {
                return Err(SyntaxError::UnexpectedCharacter('.'));
            }
            return Ok(Token::Identifier(member));
        }
        Ok(Token::Identifier(name))
    }

    fn take_identifier_run(&mut self) -> String {
        let rest = self.rest();
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            let valid = if i == 0 {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '_'
            };
            if !valid {
                break;
            }
            end = i + c.len_utf8();
        }
        self.pos += end;
        rest[..end].to_string()
    }
}
