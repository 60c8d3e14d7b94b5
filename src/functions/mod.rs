//! Closed function/constant registry.
//!
//! The whitelist is a compile-time `match`, not a runtime map: nothing can be
//! registered, removed, or shadowed after the crate is built, and lookups are
//! pure functions that are safe to call from any thread.

use crate::error::EvalError;

/// A callable registry entry. Arity is part of the variant; domain errors
/// (negative sqrt, log of zero, ...) propagate as non-finite IEEE-754 values
/// rather than as `Err`.
#[derive(Clone, Copy)]
pub enum Callable {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Ternary {
        signature: &'static str,
        call: fn(f64, f64, f64) -> f64,
    },
    /// Two or more arguments.
    Variadic(fn(&[f64]) -> f64),
}

impl Callable {
    /// Applies the entry to already-evaluated arguments, checking arity.
    pub(crate) fn apply(self, name: &str, args: &[f64]) -> Result<f64, EvalError> {
        match self {
            Callable::Unary(f) => match args {
                [x] => Ok(f(*x)),
                _ => Err(wrong_arity(name, "1 argument", args.len())),
            },
            Callable::Binary(f) => match args {
                [a, b] => Ok(f(*a, *b)),
                _ => Err(wrong_arity(name, "2 arguments", args.len())),
            },
            Callable::Ternary { signature, call } => match args {
                [a, b, c] => Ok(call(*a, *b, *c)),
                _ => Err(EvalError::WrongTernaryArity {
                    name: name.to_string(),
                    signature,
                }),
            },
            Callable::Variadic(f) => {
                if args.len() >= 2 {
                    Ok(f(args))
                } else {
                    Err(wrong_arity(name, "at least 2 arguments", args.len()))
                }
            }
        }
    }
}

fn wrong_arity(name: &str, expected: &'static str, got: usize) -> EvalError {
    EvalError::WrongArity {
        name: name.to_string(),
        expected,
        got,
    }
}

/// Looks up a whitelisted function by name.
pub fn function(name: &str) -> Option<Callable> {
    use Callable::{Binary, Ternary, Unary, Variadic};
    let callable = match name {
        "abs" => Unary(f64::abs),
        "ceil" => Unary(f64::ceil),
        "floor" => Unary(f64::floor),
        "round" => Unary(f64::round),
        "trunc" => Unary(f64::trunc),
        "sqrt" => Unary(f64::sqrt),
        "cbrt" => Unary(f64::cbrt),
        "exp" => Unary(f64::exp),
        "log" => Unary(f64::ln),
        "log2" => Unary(f64::log2),
        "log10" => Unary(f64::log10),
        "sin" => Unary(f64::sin),
        "cos" => Unary(f64::cos),
        "tan" => Unary(f64::tan),
        "asin" => Unary(f64::asin),
        "acos" => Unary(f64::acos),
        "atan" => Unary(f64::atan),
        "sinh" => Unary(f64::sinh),
        "cosh" => Unary(f64::cosh),
        "tanh" => Unary(f64::tanh),
        "sign" => Unary(sign),
        "atan2" => Binary(f64::atan2),
        "pow" => Binary(f64::powf),
        "min" => Variadic(fold_min),
        "max" => Variadic(fold_max),
        "hypot" => Variadic(fold_hypot),
        "clamp" => Ternary {
            signature: "clamp(value, min, max)",
            call: clamp,
        },
        "lerp" => Ternary {
            signature: "lerp(a, b, t)",
            call: lerp,
        },
        _ => return None,
    };
    Some(callable)
}

/// Looks up a named constant by name.
pub fn constant(name: &str) -> Option<f64> {
    use std::f64::consts;
    let value = match name {
        "PI" => consts::PI,
        "E" => consts::E,
        "LN2" => consts::LN_2,
        "LN10" => consts::LN_10,
        "LOG2E" => consts::LOG2_E,
        "LOG10E" => consts::LOG10_E,
        "SQRT2" => consts::SQRT_2,
        "SQRT1_2" => consts::FRAC_1_SQRT_2,
        _ => return None,
    };
    Some(value)
}

/// `sign(0)` is `0` and `sign(NaN)` is NaN, unlike `f64::signum`.
fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else if x > 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    // min(max(value, lo), hi) exactly; an inverted range resolves to hi.
    value.max(lo).min(hi)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn fold_min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn fold_hypot(args: &[f64]) -> f64 {
    args.iter().copied().fold(0.0, f64::hypot)
}
