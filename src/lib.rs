//! Safe arithmetic formula evaluation for interactive tuning tools.
//!
//! End users type formulas like `base * 1.1 ** level` that get evaluated
//! thousands of times per session over varying variable bindings. The
//! language is a closed whitelist: arithmetic operators, registered math
//! functions and constants, caller-supplied variables — nothing else, and in
//! particular no arbitrary code execution.
//!
//! Every call re-tokenizes and re-parses the source text; there is no
//! compilation or caching tier. The core is stateless and synchronous, so
//! concurrent callers need no coordination.

pub mod error;
pub mod expr;
pub mod functions;

use std::collections::HashMap;

use log::debug;

pub use error::{EvalError, FormulaError, SyntaxError};
use expr::{tokenize, Evaluator};

/// Evaluates a formula against the given variable bindings.
///
/// Returns the finite result, or a typed error whose message is meant to be
/// shown verbatim to the formula's author. NaN and ±infinity final results
/// are rejected; non-finite intermediates are allowed to flow through.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("base".to_string(), 10.0), ("level".to_string(), 5.0)]);
/// let value = formulite::evaluate("base * level", &vars).unwrap();
/// assert_eq!(value, 50.0);
/// ```
pub fn evaluate(expression: &str, variables: &HashMap<String, f64>) -> Result<f64, FormulaError> {
    debug!("evaluating formula: {expression}");
    let tokens = tokenize(expression)?;
    let value = Evaluator::new(&tokens, variables).evaluate()?;
    if !value.is_finite() {
        return Err(EvalError::NonFiniteResult.into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_vars() -> HashMap<String, f64> {
        HashMap::new()
    }

    #[test]
    fn test_evaluates_plain_arithmetic() {
        assert_eq!(evaluate("2 + 3 * 4", &no_vars()).unwrap(), 14.0);
        assert_eq!(evaluate("2 ** 3 ** 2", &no_vars()).unwrap(), 512.0);
        assert_eq!(evaluate("sqrt(16) + pow(3, 2)", &no_vars()).unwrap(), 13.0);
    }

    #[test]
    fn test_rejects_non_finite_results() {
        assert_eq!(
            evaluate("1/0", &no_vars()),
            Err(EvalError::NonFiniteResult.into())
        );
        assert_eq!(
            evaluate("0/0", &no_vars()),
            Err(EvalError::NonFiniteResult.into())
        );
        assert_eq!(
            evaluate("1 % 0", &no_vars()),
            Err(EvalError::NonFiniteResult.into())
        );
        assert_eq!(
            evaluate("pow(10, 1000)", &no_vars()),
            Err(EvalError::NonFiniteResult.into())
        );
    }

    #[test]
    fn test_non_finite_intermediates_may_cancel() {
        assert_eq!(evaluate("min(1/0, 5)", &no_vars()).unwrap(), 5.0);
    }

    #[test]
    fn test_syntax_errors_propagate_unchanged() {
        assert_eq!(
            evaluate("2 ^ 3", &no_vars()),
            Err(SyntaxError::CaretExponent.into())
        );
        assert_eq!(
            evaluate("", &no_vars()),
            Err(SyntaxError::UnexpectedEnd.into())
        );
    }

    #[test]
    fn test_error_text_shown_to_users() {
        let err = evaluate("base * missing", &HashMap::from([("base".to_string(), 10.0)]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown variable or constant: missing");

        let err = evaluate("1/0", &no_vars()).unwrap_err();
        assert_eq!(err.to_string(), "Expression must return a valid number");
    }
}
