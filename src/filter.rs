//! Filtering of text blocks, optionally grouped under headings.
//!
//! A block is shown when the query matches it and is then highlighted.
//! A section (a heading plus the blocks that follow it) is shown when at
//! least one of its blocks is.

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    config::{Config, HighlightTerms},
    highlight::{self, MarkStyle},
    search_query::{collect_terms, evaluate, Expr, MatchResult},
};

#[derive(Clone, Debug)]
pub struct FilterOptions {
    /// `None` disables highlighting.
    pub style: Option<MarkStyle>,
    pub highlight_terms: HighlightTerms,
    /// Evaluate on the rayon pool from this many blocks on.
    pub parallel_threshold: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for FilterOptions {
    fn from(config: &Config) -> Self {
        Self {
            style: Some(config.highlight.style.clone()),
            highlight_terms: config.highlight.terms,
            parallel_threshold: config.parallel_threshold,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockOutcome {
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub result: MatchResult,
    /// Highlighted text, only for matched blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked: Option<String>,
}

impl BlockOutcome {
    pub fn matched(&self) -> bool {
        self.result.matched
    }

    /// Marked text when available, plain text otherwise.
    pub fn display_text(&self) -> &str {
        self.marked.as_deref().unwrap_or(&self.text)
    }
}

/// Evaluate `expr` against every block, keeping input order.
pub fn filter_blocks<S>(expr: &Expr, blocks: &[S], opts: &FilterOptions) -> Vec<BlockOutcome>
where
    S: AsRef<str> + Sync,
{
    let query_terms = collect_terms(expr);

    let outcome = |(index, block): (usize, &S)| {
        let text = block.as_ref();
        let result = evaluate(expr, text);
        let marked = match (&opts.style, result.matched) {
            (Some(style), true) => {
                let terms = match opts.highlight_terms {
                    HighlightTerms::All => &query_terms,
                    HighlightTerms::Matched => &result.matched_terms,
                };
                Some(highlight::mark(text, terms, style))
            }
            _ => None,
        };
        BlockOutcome {
            index,
            text: text.to_string(),
            result,
            marked,
        }
    };

    if blocks.len() >= opts.parallel_threshold.max(1) {
        log::debug!("filtering {} blocks in parallel", blocks.len());
        blocks.par_iter().enumerate().map(outcome).collect()
    } else {
        blocks.iter().enumerate().map(outcome).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// `None` for items that precede the first heading.
    pub heading: Option<String>,
    pub items: Vec<String>,
}

/// Split `input` into sections. A line starting with `heading_prefix` opens
/// a new section; other non-blank lines are items of the current one.
pub fn split_sections(input: &str, heading_prefix: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for line in input.lines() {
        if let Some(heading) = line.strip_prefix(heading_prefix) {
            sections.push(Section {
                heading: Some(heading.trim().to_string()),
                items: vec![],
            });
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match sections.last_mut() {
            Some(section) => section.items.push(line.to_string()),
            None => sections.push(Section {
                heading: None,
                items: vec![line.to_string()],
            }),
        }
    }
    sections
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub visible: bool,
    pub items: Vec<BlockOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub any_match: bool,
    pub sections: Vec<SectionReport>,
}

impl FilterReport {
    pub fn matched_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|item| item.matched())
            .count()
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(sections = sections.len()))]
pub fn filter_sections(expr: &Expr, sections: &[Section], opts: &FilterOptions) -> FilterReport {
    let sections: Vec<SectionReport> = sections
        .iter()
        .map(|section| {
            let items = filter_blocks(expr, &section.items, opts);
            SectionReport {
                heading: section.heading.clone(),
                visible: items.iter().any(BlockOutcome::matched),
                items,
            }
        })
        .collect();

    FilterReport {
        any_match: sections.iter().any(|s| s.visible),
        sections,
    }
}
