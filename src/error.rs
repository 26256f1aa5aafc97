//! Crate-level error shared by the pipeline entry points.

use thiserror::Error;

#[cfg(feature = "lexer")]
use crate::lexer::LexError;
#[cfg(feature = "parser")]
use crate::parser::ParseError;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Error)]
pub enum CompileError {
    #[cfg(feature = "lexer")]
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[cfg(feature = "parser")]
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
