//! Lexical token model shared by the tokenizer and the evaluator.

use std::fmt;

mod evaluator;
mod tokenizer;

pub use evaluator::Evaluator;
pub use tokenizer::tokenize;

/// Operator alphabet. A closed enum rather than a string so an operator
/// outside the fixed symbol set is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pow,
    LParen,
    RParen,
    Comma,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Percent => "%",
            Op::Pow => "**",
            Op::LParen => "(",
            Op::RParen => ")",
            Op::Comma => ",",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One lexical unit of a formula. Produced once per evaluation call and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Operator(Op),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Identifier(name) => f.write_str(name),
            Token::Operator(op) => f.write_str(op.symbol()),
        }
    }
}
