use std::fmt::Display;

use polspan::Span;
use poltree::BinOp;

/// The closed set of token classes the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Newline,
    Whitespace,
    Number,

    LParen,
    RParen,

    Plus,
    Minus,
    Star,
    Slash,
}

impl TokenKind {
    /// The operator tag this token selects, for the tokens that start a
    /// binary operation.
    #[must_use]
    pub const fn operator(self) -> Option<BinOp> {
        match self {
            Self::Plus => Some(BinOp::Add),
            Self::Minus => Some(BinOp::Sub),
            Self::Star => Some(BinOp::Mul),
            Self::Slash => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Whitespace and newlines are insignificant; everything else, `Eof`
    /// included, is significant.
    #[must_use]
    pub const fn is_significant(self) -> bool {
        !matches!(self, Self::Whitespace | Self::Newline)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eof => write!(f, "end of input"),
            Self::Newline => write!(f, "newline"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Number => write!(f, "number"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
        }
    }
}

/// One scanned token: the raw text it covers, its class and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(text: &'a str, kind: TokenKind, span: Span) -> Self {
        Self { text, kind, span }
    }
}
