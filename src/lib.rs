//! Exponent-aware arithmetic formula evaluator.
//!
//! # Why?
//!
//! Form-calculation engines commonly support `+ - * /` but not
//! exponentiation. Formulas carrying a `^` or `**` marker get routed here
//! instead: the formula text (merge tags already replaced with concrete
//! numbers by the host) is stripped to a safe character set, `**` markers
//! are normalized to `^`, and the rest is parsed and evaluated as ordinary
//! arithmetic. The crate compiles natively for the server runtime and to
//! `wasm32` for the browser runtime, so the two cannot drift apart.
//!
//! Nothing in the input is ever executed as code: evaluation goes through
//! a dedicated grammar over a whitelisted character set, never through a
//! general-purpose language evaluator.
//!
//! # Example
//!
//! ```rust
//! use exponent_expr::{contains_exponent, evaluate};
//!
//! // Formulas without an exponent marker stay with the host's own engine.
//! assert!(!contains_exponent("1 + 2"));
//!
//! assert_eq!(evaluate("2^3").unwrap(), 8.0);
//! assert_eq!(evaluate("2**3").unwrap(), 8.0);
//! // `^` is right-associative.
//! assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
//! ```

mod error;
mod evaluate;
mod expression;
mod parse;
mod sanitize;

#[cfg(target_arch = "wasm32")]
mod wasm;

/// Uses the [`pest`] parsing expression grammar language.
///
/// ```text
#[doc = include_str!("grammar.pest")]
/// ```
pub mod grammar_doc {}

pub use error::*;
pub use expression::*;
pub use parse::{ParseError, MAX_FORMULA_BYTES, MAX_PAREN_DEPTH};
pub use sanitize::*;

/// Evaluates an exponent-carrying formula to a double-precision result.
///
/// Runs the pipeline end to end: sanitize, normalize exponent markers,
/// parse, evaluate. Pure and stateless; each call owns its expression
/// tree exclusively, so concurrent callers need no coordination.
pub fn evaluate(formula: &str) -> EvalResult<f64> {
    Ok(Expression::parse(formula)?.evaluate())
}
