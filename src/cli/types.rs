use clap::Args as ClapArgs;

use crate::config::HighlightTerms;

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Don't mark matched terms in the output
    #[clap(long, default_value = "false")]
    pub no_highlight: bool,

    /// Which terms to mark: every query term, or only the ones
    /// that made the block match. Overrides the config file.
    #[clap(long, value_enum)]
    pub highlight_terms: Option<HighlightTerms>,
}

/// What a successful command found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NoMatch,
}

impl Outcome {
    pub fn from_matched(matched: bool) -> Self {
        if matched {
            Self::Matched
        } else {
            Self::NoMatch
        }
    }
}
