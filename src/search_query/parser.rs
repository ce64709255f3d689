use serde::Serialize;

use super::errors::QueryParseError;
use super::lexer::{Spanned, Token};

/// A parsed boolean query.
///
/// The tree is immutable once built; evaluation and term collection only
/// borrow it, so one tree can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    /// Parenthesized sub-expression. Precedence is already encoded by the
    /// tree shape, so this is a transparent wrapper.
    Group(Box<Expr>),
    Term(String),
}

impl Expr {
    pub fn term(text: impl Into<String>) -> Self {
        Expr::Term(text.into())
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }

    /// The expression an empty query parses to: matches everything.
    pub fn match_all() -> Self {
        Expr::Term(String::new())
    }
}

/// Deepest tree the parser will build. Evaluation, term collection and
/// dropping all recurse once per level.
pub const MAX_DEPTH: usize = 256;

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    /// Open parens and `not`s around the current position
    nesting: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    /// Char position of the next token, or of the last one at end of input.
    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or(self.tokens.last())
            .map_or(0, |s| s.position)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn unexpected(spanned: Spanned) -> QueryParseError {
        QueryParseError::UnexpectedToken {
            token: spanned.token.to_string(),
            position: spanned.position,
        }
    }

    fn check_depth(depth: usize, position: usize) -> Result<(), QueryParseError> {
        if depth > MAX_DEPTH {
            return Err(QueryParseError::TooDeep { position });
        }
        Ok(())
    }

    fn enter(&mut self, position: usize) -> Result<(), QueryParseError> {
        self.nesting += 1;
        Self::check_depth(self.nesting, position)
    }

    /// Every parse step returns the expression with its height.
    ///
    /// or_expr = and_expr ("or" and_expr)*
    fn parse_or(&mut self) -> Result<(Expr, usize), QueryParseError> {
        let (mut left, mut height) = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Or)) {
            let position = self.position();
            self.advance();
            let (right, right_height) = self.parse_and()?;
            height = height.max(right_height) + 1;
            Self::check_depth(height, position)?;
            left = Expr::or(left, right);
        }
        Ok((left, height))
    }

    /// and_expr = not_expr (("and")? not_expr)*
    ///
    /// Two adjacent operands without an operator between them are an
    /// implicit AND.
    fn parse_and(&mut self) -> Result<(Expr, usize), QueryParseError> {
        let (mut left, mut height) = self.parse_not()?;
        loop {
            let position = self.position();
            match self.peek() {
                Some(Token::And) => {
                    self.advance();
                }
                Some(Token::Or) | Some(Token::RParen) | None => break,
                Some(_) => {}
            }
            let (right, right_height) = self.parse_not()?;
            height = height.max(right_height) + 1;
            Self::check_depth(height, position)?;
            left = Expr::and(left, right);
        }
        Ok((left, height))
    }

    /// not_expr = "not" not_expr | primary
    fn parse_not(&mut self) -> Result<(Expr, usize), QueryParseError> {
        if matches!(self.peek(), Some(Token::Not)) {
            self.enter(self.position())?;
            self.advance();
            let (inner, height) = self.parse_not()?;
            self.nesting -= 1;
            return Ok((Expr::not(inner), height + 1));
        }
        self.parse_primary()
    }

    /// primary = "(" or_expr ")" | term
    fn parse_primary(&mut self) -> Result<(Expr, usize), QueryParseError> {
        let spanned = self.advance().ok_or(QueryParseError::UnexpectedEnd)?;
        match spanned.token {
            Token::LParen => {
                self.enter(spanned.position)?;
                let (expr, height) = self.parse_or()?;
                self.nesting -= 1;
                match self.advance() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok((Expr::group(expr), height + 1)),
                    Some(other) => Err(Self::unexpected(other)),
                    None => Err(QueryParseError::UnclosedGroup {
                        position: spanned.position,
                    }),
                }
            }
            Token::Word(w) | Token::QuotedString(w) => Ok((Expr::Term(w), 1)),
            _ => Err(Self::unexpected(spanned)),
        }
    }
}

/// Remove `LParen RParen` pairs (empty groups), repeatedly, so `(())`
/// disappears as well.
pub fn remove_empty_parens(mut tokens: Vec<Spanned>) -> Vec<Spanned> {
    loop {
        let mut changed = false;
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if i + 1 < tokens.len()
                && tokens[i].token == Token::LParen
                && tokens[i + 1].token == Token::RParen
            {
                changed = true;
                i += 2;
            } else {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
        tokens = out;
        if !changed {
            break;
        }
    }
    tokens
}

/// Parse a token stream into an expression tree.
/// An empty stream is the match-all expression.
pub fn parse_tokens(tokens: Vec<Spanned>) -> Result<Expr, QueryParseError> {
    if tokens.is_empty() {
        return Ok(Expr::match_all());
    }
    let mut parser = Parser::new(tokens);
    let (result, _) = parser.parse_or()?;
    if let Some(trailing) = parser.advance() {
        return Err(Parser::unexpected(trailing));
    }
    Ok(result)
}
