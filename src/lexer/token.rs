use std::fmt;

/// Classified lexeme together with the source text it was read from.
///
/// Tokens carry no position; the line number only lives inside the lexer
/// for its own [`LexError`](super::LexError).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self { kind, text }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Basic token kind
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// {
    OpenBrace,
    /// }
    CloseBrace,
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// ;
    Semicolon,
    /// int keyword
    Int,
    /// return keyword
    Return,
    /// any non-keyword name (function names, variables)
    Identifier,
    /// run of decimal digits
    IntLiteral,
    /// unary minus; never produced, `-` is lexed as [`LogicalNegation`](Self::LogicalNegation)
    Negation,
    /// ~
    BitwiseComplement,
    /// ! and -
    LogicalNegation,
    /// +
    Plus,
    /// *
    Star,
    /// /
    Slash,
    /// binary minus; never produced by the lexer
    Minus,
}

impl TokenKind {
    /// Kind of a single-character token, if `c` is one.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c {
            '{' => Self::OpenBrace,
            '}' => Self::CloseBrace,
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            ';' => Self::Semicolon,
            '~' => Self::BitwiseComplement,
            '!' | '-' => Self::LogicalNegation,
            '+' => Self::Plus,
            '*' => Self::Star,
            '/' => Self::Slash,
            _ => return None,
        };
        Some(kind)
    }

    /// Keyword kind for `word`, [`Identifier`](Self::Identifier) otherwise.
    pub fn from_word(word: &str) -> Self {
        match word {
            "int" => Self::Int,
            "return" => Self::Return,
            _ => Self::Identifier,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OpenBrace => write!(f, "'{{'"),
            Self::CloseBrace => write!(f, "'}}'"),
            Self::OpenParen => write!(f, "'('"),
            Self::CloseParen => write!(f, "')'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Int => write!(f, "'int'"),
            Self::Return => write!(f, "'return'"),
            Self::Identifier => write!(f, "identifier"),
            Self::IntLiteral => write!(f, "integer literal"),
            Self::Negation => write!(f, "negation"),
            Self::BitwiseComplement => write!(f, "'~'"),
            Self::LogicalNegation => write!(f, "logical negation"),
            Self::Plus => write!(f, "'+'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Minus => write!(f, "binary minus"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}
