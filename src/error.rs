use thiserror::Error;

/// Malformed input text. The expression never got far enough to evaluate.
///
/// Message wording is a compatibility contract: the surrounding tools render
/// these strings verbatim next to the formula input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// `^` is the near-universal typo for "power"; point at the two
    /// supported spellings instead of the generic message.
    #[error("Use '**' or 'pow(base, exponent)' instead of '^'")]
    CaretExponent,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing closing parenthesis")]
    MissingClosingParen,

    #[error("Missing closing parenthesis in call to '{0}'")]
    UnterminatedCall(String),

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Expression is nested too deeply")]
    TooDeeplyNested,
}

/// Structurally valid input that cannot be evaluated: unknown names, wrong
/// arity, or a non-finite final result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unknown or disallowed function: {0}")]
    UnknownFunction(String),

    #[error("Unknown variable or constant: {0}")]
    UnknownIdentifier(String),

    #[error("Function '{name}' expects {expected}, got {got}")]
    WrongArity {
        name: String,
        expected: &'static str,
        got: usize,
    },

    /// `clamp` and `lerp` get their own message naming the full signature.
    #[error("{name} requires exactly 3 arguments: {signature}")]
    WrongTernaryArity {
        name: String,
        signature: &'static str,
    },

    #[error("Expression must return a valid number")]
    NonFiniteResult,
}

/// Any failure `evaluate` can return. Exactly two kinds exist; the core never
/// recovers from either, it only reports them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
