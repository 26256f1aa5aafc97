use thiserror::Error;

/// Character that starts no token, with the 1-based line it was found on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("invalid character '{ch}' on line {line}")]
pub struct LexError {
    pub ch: char,
    pub line: u64,
}

impl LexError {
    pub fn get_ln(&self) -> u64 {
        self.line
    }
}
