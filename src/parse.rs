use once_cell::sync::Lazy;
use pest::iterators::{Pair, Pairs};
use pest::{prec_climber::*, Parser};
use pest_derive::Parser;

use crate::error::{EvalError, EvalResult};
use crate::expression::Expression;
use crate::sanitize::{normalize_exponents, sanitize};

#[derive(Parser)]
#[grammar = "grammar.pest"] // relative to project `src`
struct FormulaParser;

pub type ParseError = pest::error::Error<Rule>;

/// Formulas longer than this many bytes are rejected before parsing.
pub const MAX_FORMULA_BYTES: usize = 1024;

/// Parentheses nested deeper than this are rejected before parsing.
pub const MAX_PAREN_DEPTH: usize = 64;

impl Expression {
    /// Parses raw formula text into an expression tree.
    ///
    /// Runs the whole front half of the pipeline: the length cap, the
    /// character whitelist, `**` normalization, the nesting cap, and the
    /// grammar. The input may be arbitrary user-controlled text; anything
    /// outside the whitelist is deleted before the grammar ever sees it.
    pub fn parse(formula: &str) -> EvalResult<Self> {
        if formula.len() > MAX_FORMULA_BYTES {
            return Err(EvalError::InputTooLarge(format!(
                "{} bytes, limit is {MAX_FORMULA_BYTES}",
                formula.len()
            )));
        }
        let formula = normalize_exponents(&sanitize(formula));
        check_nesting(&formula)?;
        let pairs = FormulaParser::parse(Rule::calculation, &formula)?;
        Ok(climb_recursive(pairs))
    }
}

// Caps the recursion depth of both the parser and the evaluator.
fn check_nesting(formula: &str) -> EvalResult<()> {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for c in formula.chars() {
        match c {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if deepest > MAX_PAREN_DEPTH {
        return Err(EvalError::InputTooLarge(format!(
            "parentheses nest {deepest} levels deep, limit is {MAX_PAREN_DEPTH}"
        )));
    }
    Ok(())
}

static PRECEDENCE_CLIMBER: Lazy<PrecClimber<Rule>> = Lazy::new(|| {
    use Assoc::*;
    use Rule::*;

    PrecClimber::new(vec![
        Operator::new(add, Left) | Operator::new(subtract, Left),
        Operator::new(multiply, Left) | Operator::new(divide, Left),
        Operator::new(power, Right),
    ])
});

fn climb_recursive(input: Pairs<Rule>) -> Expression {
    PRECEDENCE_CLIMBER.climb(
        input,
        |pair: Pair<Rule>| match pair.as_rule() {
            Rule::expr => climb_recursive(pair.into_inner()),
            Rule::number => {
                let literal_str = pair.as_str();
                if let Ok(value) = literal_str.parse::<f64>() {
                    return Expression::Literal(value);
                }
                panic!("Unexpected literal: {}", literal_str)
            }
            Rule::neg_expr => {
                let mut inner = pair.into_inner();
                let unary = inner.next().unwrap();
                match unary.as_rule() {
                    Rule::neg => Expression::Neg(Box::new(climb_recursive(inner))),
                    x => panic!("Unexpected unary operator: {x:?}"),
                }
            }
            x => panic!("Unexpected primary rule {x:?}"),
        },
        |lhs: Expression, op: Pair<Rule>, rhs: Expression| match op.as_rule() {
            Rule::add => Expression::Add(Box::new(lhs), Box::new(rhs)),
            Rule::divide => Expression::Div(Box::new(lhs), Box::new(rhs)),
            Rule::multiply => Expression::Mul(Box::new(lhs), Box::new(rhs)),
            Rule::power => Expression::Pow(Box::new(lhs), Box::new(rhs)),
            Rule::subtract => Expression::Sub(Box::new(lhs), Box::new(rhs)),
            x => panic!("Unexpected operator {x:?}"),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(formula: &str) {
        assert!(
            matches!(
                Expression::parse(formula),
                Err(EvalError::MalformedExpression(_))
            ),
            "{formula:?} should not parse"
        );
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert_malformed("");
        assert_malformed("   ");
        assert_malformed("1+");
        assert_malformed("*3");
        assert_malformed("2*(3+4))");
        assert_malformed("((1+2)");
        assert_malformed("()");
        assert_malformed("2 3");
        assert_malformed("2^^3");
        assert_malformed("2 * * 3");
        assert_malformed("1.2.3");
    }

    #[test]
    fn rejects_what_sanitization_leaves_of_garbage() {
        // Letters vanish; the dot and parens they leave behind do not parse.
        assert_malformed("2^3; process.exit()");
    }

    #[test]
    fn length_cap() {
        let long = "9".repeat(MAX_FORMULA_BYTES + 1);
        assert!(matches!(
            Expression::parse(&long),
            Err(EvalError::InputTooLarge(_))
        ));
    }

    #[test]
    fn nesting_cap() {
        let deep = format!(
            "{}1{}",
            "(".repeat(MAX_PAREN_DEPTH + 1),
            ")".repeat(MAX_PAREN_DEPTH + 1)
        );
        assert!(matches!(
            Expression::parse(&deep),
            Err(EvalError::InputTooLarge(_))
        ));

        let legal = format!(
            "{}1{}",
            "(".repeat(MAX_PAREN_DEPTH),
            ")".repeat(MAX_PAREN_DEPTH)
        );
        assert!(Expression::parse(&legal).is_ok());
    }

    #[test]
    fn parses_unary_chains() {
        assert!(Expression::parse("--2").is_ok());
        assert!(Expression::parse("2 - -3").is_ok());
        assert!(Expression::parse("2^-3").is_ok());
    }
}
