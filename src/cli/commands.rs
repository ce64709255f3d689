use std::{io::Write, path::PathBuf};

use serde::Serialize;

use crate::{
    cli::{errors::CliResult, types::Outcome, HighlightArgs},
    config::{Config, HighlightTerms},
    filter::{self, FilterOptions, FilterReport, Section},
    highlight,
    search_query::{self, collect_terms, evaluate, Expr, MatchResult},
};

/// Print the expression tree of a query
#[derive(Debug, Clone)]
pub struct ParseCommand {
    pub expr: Expr,
}

impl ParseCommand {
    pub fn new(query: &str) -> CliResult<Self> {
        Ok(Self {
            expr: search_query::parse(query)?,
        })
    }

    pub fn execute(self, out: &mut impl Write) -> CliResult<Outcome> {
        writeln!(out, "{}", serde_json::to_string_pretty(&self.expr)?)?;
        Ok(Outcome::Matched)
    }
}

/// Print the terms of a query
#[derive(Debug, Clone)]
pub struct TermsCommand {
    pub expr: Expr,
}

impl TermsCommand {
    pub fn new(query: &str) -> CliResult<Self> {
        Ok(Self {
            expr: search_query::parse(query)?,
        })
    }

    pub fn execute(self, out: &mut impl Write) -> CliResult<Outcome> {
        let terms = collect_terms(&self.expr);
        writeln!(out, "{}", serde_json::to_string(&terms)?)?;
        Ok(Outcome::Matched)
    }
}

/// Test one text against a query
#[derive(Debug, Clone)]
pub struct MatchCommand {
    pub expr: Expr,
    pub text: String,
    pub highlight: bool,
    pub highlight_terms: Option<HighlightTerms>,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    #[serde(flatten)]
    result: &'a MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    marked: Option<String>,
}

impl MatchCommand {
    pub fn new(
        query: &str,
        text: String,
        highlight: bool,
        highlight_terms: Option<HighlightTerms>,
    ) -> CliResult<Self> {
        Ok(Self {
            expr: search_query::parse(query)?,
            text,
            highlight,
            highlight_terms,
        })
    }

    pub fn execute(self, config: &Config, out: &mut impl Write) -> CliResult<Outcome> {
        let result = evaluate(&self.expr, &self.text);

        let marked = if self.highlight && result.matched {
            let terms = match self.highlight_terms.unwrap_or(config.highlight.terms) {
                HighlightTerms::All => collect_terms(&self.expr),
                HighlightTerms::Matched => result.matched_terms.clone(),
            };
            Some(highlight::mark(&self.text, &terms, &config.highlight.style))
        } else {
            None
        };

        let output = MatchOutput {
            result: &result,
            marked,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        Ok(Outcome::from_matched(result.matched))
    }
}

/// Filter the lines of a file or stdin
#[derive(Debug, Clone)]
pub struct FilterCommand {
    pub expr: Expr,
    pub file: Option<PathBuf>,
    pub sections: bool,
    pub count_only: bool,
    pub json: bool,
    pub highlight: HighlightArgs,
}

impl FilterCommand {
    pub fn new(
        query: &str,
        file: Option<PathBuf>,
        sections: bool,
        count_only: bool,
        json: bool,
        highlight: HighlightArgs,
    ) -> CliResult<Self> {
        // an invalid query must stop us before any input is read
        let expr = search_query::parse(query)?;
        Ok(Self {
            expr,
            file,
            sections,
            count_only,
            json,
            highlight,
        })
    }

    fn options(&self, config: &Config) -> FilterOptions {
        let mut opts = FilterOptions::from(config);
        if self.highlight.no_highlight {
            opts.style = None;
        }
        if let Some(terms) = self.highlight.highlight_terms {
            opts.highlight_terms = terms;
        }
        opts
    }

    fn read_input(&self) -> CliResult<String> {
        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(std::io::read_to_string(std::io::stdin())?),
        }
    }

    pub fn execute(self, config: &Config, out: &mut impl Write) -> CliResult<Outcome> {
        let input = self.read_input()?;
        self.execute_on(&input, config, out)
    }

    /// Filter already loaded `input`.
    pub fn execute_on(&self, input: &str, config: &Config, out: &mut impl Write) -> CliResult<Outcome> {
        let opts = self.options(config);

        let sections = if self.sections {
            filter::split_sections(input, &config.heading_prefix)
        } else {
            let items = input
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect();
            vec![Section {
                heading: None,
                items,
            }]
        };

        let report = filter::filter_sections(&self.expr, &sections, &opts);
        log::debug!(
            "{} of {} sections visible, {} blocks matched",
            report.sections.iter().filter(|s| s.visible).count(),
            report.sections.len(),
            report.matched_count()
        );

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else if self.count_only {
            writeln!(out, "{} blocks matched", report.matched_count())?;
        } else if !report.any_match {
            writeln!(out, "No matches")?;
        } else {
            print_report(&report, &config.heading_prefix, out)?;
        }

        Ok(Outcome::from_matched(report.any_match))
    }
}

fn print_report(report: &FilterReport, heading_prefix: &str, out: &mut impl Write) -> CliResult<()> {
    for section in report.sections.iter().filter(|s| s.visible) {
        if let Some(heading) = &section.heading {
            writeln!(out, "{heading_prefix}{heading}")?;
        }
        for item in section.items.iter().filter(|item| item.matched()) {
            writeln!(out, "{}", item.display_text())?;
        }
    }
    Ok(())
}
