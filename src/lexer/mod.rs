//! Scanner: source text to a flat token sequence.
//!
//! There is no end-of-file token; running out of tokens is the end
//! condition for the parser.

mod cursor;
mod lexer_error;
mod token;

use cursor::Cursor;
pub use lexer_error::LexError;
pub use token::{Token, TokenKind};

use tracing::{debug, trace};

pub type Tokens = Vec<Token>;

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lex_word(cursor: &mut Cursor) -> Token {
    let word = cursor.take_while(is_identifier_char);
    Token::new(TokenKind::from_word(word), word)
}

fn lex_int_literal(cursor: &mut Cursor) -> Token {
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    Token::new(TokenKind::IntLiteral, digits)
}

fn lex_token(cursor: &mut Cursor, c: char) -> Result<Token, LexError> {
    if let Some(kind) = TokenKind::from_char(c) {
        cursor.take();
        return Ok(Token::new(kind, c));
    }

    match c {
        c if c.is_ascii_alphabetic() => Ok(lex_word(cursor)),
        c if c.is_ascii_digit() => Ok(lex_int_literal(cursor)),
        ch => Err(LexError {
            ch,
            line: cursor.line(),
        }),
    }
}

/// Splits `input` into tokens, failing on the first character that starts
/// no token.
pub fn lex(input: &str) -> Result<Tokens, LexError> {
    let mut tokens = Tokens::new();
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespaces();
    while let Some(c) = cursor.peek() {
        let token = lex_token(&mut cursor, c)?;
        trace!(kind = ?token.kind, text = %token.text, line = cursor.line(), "token");
        tokens.push(token);
        cursor.skip_whitespaces();
    }

    debug_assert!(cursor.is_eof());
    debug!(count = tokens.len(), "lexing finished");
    Ok(tokens)
}
