use super::eval::merge_terms;
use super::parser::Expr;

/// Every literal term in `expr`, left to right, first occurrence wins.
///
/// Unlike [`evaluate`](super::evaluate) this visits every branch, including
/// negated ones, so the result does not depend on any text. Empty terms are
/// skipped. Duplicates are detected case-sensitively: `Foo` and `foo` are
/// both kept.
pub fn collect_terms(expr: &Expr) -> Vec<String> {
    match expr {
        Expr::Term(term) if term.is_empty() => vec![],
        Expr::Term(term) => vec![term.clone()],
        Expr::Not(inner) | Expr::Group(inner) => collect_terms(inner),
        Expr::And(left, right) | Expr::Or(left, right) => {
            merge_terms(collect_terms(left), collect_terms(right))
        }
    }
}
