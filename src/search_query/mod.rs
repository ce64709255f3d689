mod errors;
mod eval;
mod lexer;
mod parser;
mod terms;

pub use errors::QueryParseError;
pub use eval::{evaluate, term_matches, MatchResult};
pub use parser::{Expr, MAX_DEPTH};
pub use terms::collect_terms;

use lexer::Spanned;

/// Parse a boolean query into an expression tree.
///
/// Behavior:
/// - Empty/whitespace → match-all expression (`Term("")`)
/// - `and`/`or`/`not` are keywords in any letter case
/// - Adjacent terms without an operator → implicit `and`
/// - Empty parens `()` → silently removed
/// - All-operator input (`and`, `or not`) → re-interpreted as literal words
/// - Dangling operators (`foo and`) → error
/// - Unmatched parens (`(foo`, `foo)`) or quotes → error
pub fn parse(input: &str) -> Result<Expr, QueryParseError> {
    let tokens = lexer::tokenize(input)?;
    let tokens = parser::remove_empty_parens(tokens);

    let has_term = tokens.iter().any(|s| s.token.is_term());
    let tokens = if has_term {
        tokens
    } else {
        tokens
            .into_iter()
            .map(|s| Spanned {
                token: s.token.into_literal(),
                position: s.position,
            })
            .collect()
    };

    let expr = parser::parse_tokens(tokens)?;
    log::debug!("parsed query {input:?} into {expr:?}");
    Ok(expr)
}

/// Convenience: parse + evaluate in one call.
/// Returns error if query is invalid.
pub fn matches(query: &str, text: &str) -> Result<bool, QueryParseError> {
    let expr = parse(query)?;
    Ok(evaluate(&expr, text).matched)
}
