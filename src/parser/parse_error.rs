use crate::lexer::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// What the grammar rule being applied wanted to see.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
    EndOfInput,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("expected {expected}, but found {}", display_found(.found))]
pub struct ParseError {
    pub expected: Expected,
    /// `None` when the token sequence ran out.
    pub found: Option<Token>,
}

fn display_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => String::from("end of input"),
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Expression => write!(f, "expression"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}
