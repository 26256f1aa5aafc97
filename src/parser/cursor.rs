use crate::lexer::{Token, TokenKind};
use crate::parser::{Expected, ParseError, Result};

#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn bump(&mut self) {
        self.position += 1;
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consumes the current token if it has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        let current = self.peek().filter(|t| t.is(kind));
        if current.is_some() {
            self.bump();
        }
        current
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token> {
        self.next_if(kind)
            .ok_or_else(|| self.error(Expected::Token(kind)))
    }

    /// Error for the current position; `found` is `None` past the last token.
    pub fn error(&self, expected: Expected) -> ParseError {
        let found = self.peek().cloned();
        ParseError { expected, found }
    }
}
