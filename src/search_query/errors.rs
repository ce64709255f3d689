use thiserror::Error;

/// Raised when a query string cannot be turned into an expression tree.
///
/// Positions are char offsets into the query string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("unterminated quoted string starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unexpected end of input after backslash at position {position}")]
    DanglingEscape { position: usize },

    #[error("unexpected {token} at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("query nested too deeply at position {position}")]
    TooDeep { position: usize },

    #[error("expected closing parenthesis for group opened at position {position}")]
    UnclosedGroup { position: usize },
}
