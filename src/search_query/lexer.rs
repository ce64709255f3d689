use std::fmt;

use super::errors::QueryParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    QuotedString(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl Token {
    pub fn is_term(&self) -> bool {
        matches!(self, Token::Word(_) | Token::QuotedString(_))
    }

    /// Literal spelling of an operator or paren, used when the whole query
    /// has no terms and is searched for verbatim.
    pub fn into_literal(self) -> Token {
        match self {
            Token::And => Token::Word("and".to_string()),
            Token::Or => Token::Word("or".to_string()),
            Token::Not => Token::Word("not".to_string()),
            Token::LParen => Token::Word("(".to_string()),
            Token::RParen => Token::Word(")".to_string()),
            other => other,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "word '{w}'"),
            Token::QuotedString(s) => write!(f, "quoted string \"{s}\""),
            Token::And => f.write_str("'and'"),
            Token::Or => f.write_str("'or'"),
            Token::Not => f.write_str("'not'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// A token plus the char offset it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub fn tokenize(input: &str) -> Result<Vec<Spanned>, QueryParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let position = i;
        let token = match chars[i] {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '(' => {
                i += 1;
                Token::LParen
            }
            ')' => {
                i += 1;
                Token::RParen
            }
            '"' => Token::QuotedString(read_quoted(&chars, &mut i)?),
            '\\' => {
                // escaped first char: never a keyword
                i += 1;
                if i >= len {
                    return Err(QueryParseError::DanglingEscape { position });
                }
                let escaped_char = chars[i];
                i += 1;
                let rest = read_word(&chars, &mut i);
                Token::Word(format!("{escaped_char}{rest}"))
            }
            _ => {
                let word = read_word(&chars, &mut i);
                match word.to_lowercase().as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    _ => Token::Word(word),
                }
            }
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

fn read_quoted(chars: &[char], i: &mut usize) -> Result<String, QueryParseError> {
    let start = *i;
    *i += 1; // opening quote
    let mut s = String::new();
    while *i < chars.len() {
        if chars[*i] == '\\' && *i + 1 < chars.len() {
            *i += 1;
            s.push(chars[*i]);
            *i += 1;
            continue;
        }
        if chars[*i] == '"' {
            *i += 1;
            return Ok(s);
        }
        s.push(chars[*i]);
        *i += 1;
    }
    Err(QueryParseError::UnterminatedQuote { position: start })
}

fn read_word(chars: &[char], i: &mut usize) -> String {
    let mut word = String::new();
    while *i < chars.len() {
        match chars[*i] {
            c if c.is_whitespace() => break,
            '(' | ')' | '"' => break,
            c => {
                word.push(c);
                *i += 1;
            }
        }
    }
    word
}
