use thiserror::Error;

use crate::search_query::QueryParseError;

/// Errors surfaced by the command line front end
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Error in boolean search term: {0}")]
    InvalidQuery(#[from] QueryParseError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
