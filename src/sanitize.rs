/// Strips `formula` down to the characters the grammar is built for:
/// ASCII digits, `.`, whitespace, `+`, `-`, `*`, `/`, `^`, `(`, `)`.
///
/// Everything else is deleted, not escaped. Formulas arrive from
/// user-editable form configuration, so this is a capability restriction
/// rather than validation: the parser downstream must never see anything
/// resembling an identifier or a call.
pub fn sanitize(formula: &str) -> String {
    formula
        .chars()
        .filter(|&c| {
            c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')')
        })
        .collect()
}

/// Rewrites every `**` exponent marker to the grammar's `^` operator.
///
/// Idempotent: the output never contains `**` (a run of `2n + 1` asterisks
/// leaves a single `*` behind, never an adjacent pair), so normalizing
/// twice evaluates the same as normalizing once.
pub fn normalize_exponents(formula: &str) -> String {
    formula.replace("**", "^")
}

/// True if `formula` carries an exponent marker (`^` or `**`).
///
/// Hosts consult this before handing a formula over: a formula with no
/// marker keeps the result of the host's own arithmetic engine.
pub fn contains_exponent(formula: &str) -> bool {
    formula.contains('^') || formula.contains("**")
}
