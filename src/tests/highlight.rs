use crate::highlight::{find_spans, mark, MarkStyle};

const PAPER: &str = "paper by vaandrager adn harco kuppens";

#[test]
fn test_mark_keeps_text_case() {
    assert_eq!(
        mark(PAPER, &["vaAn", "kuppens"], &MarkStyle::default()),
        "paper by <mark>vaan</mark>drager adn harco <mark>kuppens</mark>"
    );
}

#[test]
fn test_mark_without_spans_is_unchanged() {
    assert_eq!(mark(PAPER, &["aarts"], &MarkStyle::default()), PAPER);
    assert_eq!(mark(PAPER, &[""], &MarkStyle::default()), PAPER);
    assert_eq!(mark(PAPER, &Vec::<String>::new(), &MarkStyle::default()), PAPER);
}

#[test]
fn test_every_occurrence_is_found() {
    assert_eq!(find_spans("RUST and rust", &["rust"]), vec![0..4, 9..13]);
}

#[test]
fn test_longer_term_wins() {
    assert_eq!(find_spans("xabcx", &["ab", "abc"]), vec![1..4]);
}

#[test]
fn test_touching_spans_merge() {
    assert_eq!(find_spans("abcd", &["ab", "cd"]), vec![0..4]);
    let style = MarkStyle {
        open: "[".to_string(),
        close: "]".to_string(),
    };
    assert_eq!(mark("abcd ab", &["ab", "cd"], &style), "[abcd] [ab]");
}

#[test]
fn test_overlapping_terms_merge() {
    assert_eq!(find_spans("abcd", &["abc", "bcd"]), vec![0..4]);
    assert_eq!(find_spans("xabcdx", &["bcd", "abc"]), vec![1..5]);
    let style = MarkStyle {
        open: "[".to_string(),
        close: "]".to_string(),
    };
    assert_eq!(mark("abcd", &["abc", "bcd"], &style), "[abcd]");
}

#[test]
fn test_term_overlapping_itself() {
    assert_eq!(find_spans("aaa", &["aa"]), vec![0..3]);
    assert_eq!(find_spans("ÄäÄ b", &["ää"]), vec![0..6]);
}

#[test]
fn test_terms_are_literal() {
    assert_eq!(find_spans("abc a.c", &["a.c"]), vec![4..7]);
    assert_eq!(find_spans("1+1=2", &["1+1"]), vec![0..3]);
}

#[test]
fn test_unicode_case_folding() {
    assert_eq!(find_spans("kein ÄRGER", &["ärger"]), vec![5..11]);
}
