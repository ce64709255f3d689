use serde::Serialize;

use super::parser::Expr;

/// Outcome of evaluating one expression against one text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    /// Terms that were evaluated as true on the path that made the whole
    /// expression true, first occurrence first. Empty when not matched.
    pub matched_terms: Vec<String>,
}

/// Case-insensitive substring test. An empty term matches any text.
pub fn term_matches(term: &str, text: &str) -> bool {
    contains_folded(&text.to_lowercase(), term)
}

/// `haystack` is already lowercased.
fn contains_folded(haystack: &str, term: &str) -> bool {
    term.is_empty() || haystack.contains(&term.to_lowercase())
}

/// Evaluate `expr` against `text`.
///
/// Operands are evaluated left to right and short-circuit: the right side
/// of an `and` whose left side failed, or of an `or` whose left side
/// succeeded, is never looked at and contributes no terms. Nothing under a
/// `not` is ever reported as a matched term.
pub fn evaluate(expr: &Expr, text: &str) -> MatchResult {
    let haystack = text.to_lowercase();
    let (matched, matched_terms) = eval_node(expr, &haystack);
    MatchResult {
        matched,
        matched_terms,
    }
}

/// `haystack` is already lowercased.
fn eval_node(expr: &Expr, haystack: &str) -> (bool, Vec<String>) {
    match expr {
        Expr::Term(term) if !contains_folded(haystack, term) => (false, vec![]),
        Expr::Term(term) if term.is_empty() => (true, vec![]),
        Expr::Term(term) => (true, vec![term.clone()]),
        Expr::Not(inner) => {
            let (matched, _) = eval_node(inner, haystack);
            (!matched, vec![])
        }
        Expr::And(left, right) => {
            let (left_matched, left_terms) = eval_node(left, haystack);
            if !left_matched {
                return (false, vec![]);
            }
            let (right_matched, right_terms) = eval_node(right, haystack);
            if !right_matched {
                return (false, vec![]);
            }
            (true, merge_terms(left_terms, right_terms))
        }
        Expr::Or(left, right) => {
            let (left_matched, left_terms) = eval_node(left, haystack);
            if left_matched {
                return (true, left_terms);
            }
            let (right_matched, right_terms) = eval_node(right, haystack);
            if right_matched {
                (true, right_terms)
            } else {
                (false, vec![])
            }
        }
        Expr::Group(inner) => eval_node(inner, haystack),
    }
}

/// Append `extra` to `terms`, skipping anything already present.
pub(super) fn merge_terms(mut terms: Vec<String>, extra: Vec<String>) -> Vec<String> {
    for term in extra {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}
