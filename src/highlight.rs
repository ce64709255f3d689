use std::ops::Range;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// Markup placed around every highlighted span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkStyle {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}

fn default_open() -> String {
    "<mark>".to_string()
}

fn default_close() -> String {
    "</mark>".to_string()
}

/// Byte ranges of every case-insensitive occurrence of any non-empty term
/// in `text`, sorted, with overlapping or touching ranges merged.
///
/// Terms are literal text; regex syntax inside them has no meaning.
/// Occurrences may overlap, both across terms (`abc` and `bcd` in `abcd`)
/// and within one term (`aa` in `aaa`).
pub fn find_spans<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Range<usize>> {
    let mut patterns: Vec<&str> = terms
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .collect();
    if patterns.is_empty() || text.is_empty() {
        return vec![];
    }
    patterns.sort_unstable();
    patterns.dedup();

    let mut found: Vec<Range<usize>> = Vec::new();
    for pattern in patterns {
        let regex = match RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                log::warn!("could not build highlight pattern for {pattern:?}: {err}");
                continue;
            }
        };

        // restart one char after each match start so overlapping
        // occurrences of the same term are found too
        let mut at = 0;
        while let Some(m) = regex.find_at(text, at) {
            found.push(m.range());
            at = next_char_boundary(text, m.start());
            if at >= text.len() {
                break;
            }
        }
    }

    found.sort_unstable_by_key(|r| (r.start, r.end));
    let mut spans: Vec<Range<usize>> = Vec::new();
    for range in found {
        match spans.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => spans.push(range),
        }
    }
    spans
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len(), |c| index + c.len_utf8())
}

/// Wrap every occurrence of `terms` in `text` with the style's markup.
/// Text without any occurrence comes back unchanged.
pub fn mark<S: AsRef<str>>(text: &str, terms: &[S], style: &MarkStyle) -> String {
    let spans = find_spans(text, terms);
    if spans.is_empty() {
        return text.to_string();
    }

    let extra = spans.len() * (style.open.len() + style.close.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&style.open);
        out.push_str(&text[span.clone()]);
        out.push_str(&style.close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
