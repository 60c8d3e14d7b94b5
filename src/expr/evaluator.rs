//! Recursive-descent parser/evaluator.
//!
//! Each grammar rule folds its operands into an `f64` as it parses; no AST is
//! built or retained. One level per precedence tier, lowest first:
//!
//! ```text
//! expression     := additive
//! additive       := multiplicative (('+' | '-') multiplicative)*   left-assoc
//! multiplicative := power (('*' | '/' | '%') power)*               left-assoc
//! power          := unary ('**' power)?                            right-assoc
//! unary          := ('+' | '-') unary | primary
//! primary        := number | '(' expression ')' | identifier [call]
//! ```

use std::collections::HashMap;

use log::debug;

use crate::error::{EvalError, FormulaError, SyntaxError};
use crate::expr::{Op, Token};
use crate::functions;

/// Hard bound on parse recursion. Every operand passes through `unary`, so
/// this caps nested parentheses, `**` chains, and sign runs alike; formulas
/// are untrusted input and must not overflow the call stack.
const MAX_DEPTH: usize = 256;

/// Single-use parser/evaluator over one token sequence.
pub struct Evaluator<'a> {
    tokens: &'a [Token],
    pos: usize,
    variables: &'a HashMap<String, f64>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(tokens: &'a [Token], variables: &'a HashMap<String, f64>) -> Self {
        Self {
            tokens,
            pos: 0,
            variables,
            depth: 0,
        }
    }

    /// Consumes the whole token sequence and returns the computed value.
    /// Anything left over after the top-level expression is a syntax error.
    pub fn evaluate(mut self) -> Result<f64, FormulaError> {
        debug!("evaluating {} tokens", self.tokens.len());
        let value = self.expression()?;
        if let Some(token) = self.peek() {
            return Err(SyntaxError::UnexpectedToken(token.to_string()).into());
        }
        Ok(value)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the next token if it is exactly `op`.
    fn eat(&mut self, op: Op) -> bool {
        match self.peek() {
            Some(Token::Operator(found)) if *found == op => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expression(&mut self) -> Result<f64, FormulaError> {
        self.additive()
    }

    fn additive(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.multiplicative()?;
        loop {
            if self.eat(Op::Plus) {
                value += self.multiplicative()?;
            } else if self.eat(Op::Minus) {
                value -= self.multiplicative()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn multiplicative(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.power()?;
        loop {
            if self.eat(Op::Star) {
                value *= self.power()?;
            } else if self.eat(Op::Slash) {
                // Division by zero yields ±infinity here; only the final
                // result is checked for finiteness, by the facade.
                value /= self.power()?;
            } else if self.eat(Op::Percent) {
                value %= self.power()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Right-associative: the exponent recurses into `power` itself, so
    /// `2 ** 3 ** 2` is `2 ** (3 ** 2)`. The LEFT operand is parsed through
    /// `unary`, which is why `-2 ** 2` is `(-2) ** 2`.
    fn power(&mut self) -> Result<f64, FormulaError> {
        let base = self.unary()?;
        if self.eat(Op::Pow) {
            let exponent = self.power()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<f64, FormulaError> {
        if self.depth == MAX_DEPTH {
            return Err(SyntaxError::TooDeeplyNested.into());
        }
        self.depth += 1;
        let value = if self.eat(Op::Plus) {
            self.unary()
        } else if self.eat(Op::Minus) {
            self.unary().map(|v| -v)
        } else {
            self.primary()
        };
        self.depth -= 1;
        value
    }

    fn primary(&mut self) -> Result<f64, FormulaError> {
        let token = match self.next() {
            Some(token) => token,
            None => return Err(SyntaxError::UnexpectedEnd.into()),
        };
        match token {
            Token::Number(n) => Ok(*n),
            Token::Operator(Op::LParen) => {
                let value = self.expression()?;
                if !self.eat(Op::RParen) {
                    return Err(SyntaxError::MissingClosingParen.into());
                }
                Ok(value)
            }
            Token::Identifier(name) => {
                if matches!(self.peek(), Some(Token::Operator(Op::LParen))) {
                    return self.call(name);
                }
                // Variables shadow constants; both lose to function position.
                if let Some(value) = self.variables.get(name) {
                    return Ok(*value);
                }
                if let Some(value) = functions::constant(name) {
                    return Ok(value);
                }
                Err(EvalError::UnknownIdentifier(name.clone()).into())
            }
            Token::Operator(op) => Err(SyntaxError::UnexpectedToken(op.to_string()).into()),
        }
    }

    /// Parses and applies `name(arg, ...)`. The callee is resolved against
    /// the registry before any argument is parsed: a name in call position
    /// is only ever a whitelisted function.
    fn call(&mut self, name: &str) -> Result<f64, FormulaError> {
        let callable = functions::function(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        self.eat(Op::LParen);
        let mut args = Vec::new();
        if !self.eat(Op::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.eat(Op::Comma) {
                    break;
                }
            }
            if !self.eat(Op::RParen) {
                return Err(SyntaxError::UnterminatedCall(name.to_string()).into());
            }
        }
        callable.apply(name, &args).map_err(Into::into)
    }
}
