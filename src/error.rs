//! Evaluator error types.

use thiserror::Error;

use crate::parse::ParseError;

/// Result type for formula evaluation.
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors returned by [`evaluate`](crate::evaluate).
///
/// Division by zero is deliberately *not* an error: arithmetic follows
/// IEEE-754, so `1/0` evaluates to infinity and `0^0` to `1`.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The sanitized formula is not a well-formed arithmetic expression
    /// (empty, unbalanced parentheses, dangling operator, ...).
    #[error("malformed expression: {0}")]
    MalformedExpression(#[from] ParseError),

    /// A defensive input cap was hit before parsing, either on formula
    /// length or on parenthesis nesting depth.
    #[error("input too large: {0}")]
    InputTooLarge(String),
}
