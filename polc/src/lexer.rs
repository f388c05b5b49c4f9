use std::str::Chars;

use polspan::{Span, Spanned};
use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

pub type LexError = Spanned<LexErrorKind>;
pub type LexResult<T> = Result<T, LexError>;

pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
        }
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or('\0')
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.first()) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.byte_start, self.byte)
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    fn token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(self.view(), kind, self.make_span())
    }

    fn number(&mut self) -> Token<'a> {
        self.eat_while(|c| c.is_ascii_digit());
        self.token(TokenKind::Number)
    }

    /// One raw scan step. Whitespace and newlines come back as ordinary
    /// tokens; at the end of input every call returns `Eof` without
    /// advancing the cursor.
    pub fn scan(&mut self) -> LexResult<Token<'a>> {
        self.byte_start = self.byte;

        let Some(c) = self.bump() else {
            return Ok(self.token(TokenKind::Eof));
        };

        let kind = match c {
            '0'..='9' => return Ok(self.number()),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ' ' => TokenKind::Whitespace,
            '\n' => TokenKind::Newline,
            _ => {
                return Err(LexError::new(
                    LexErrorKind::UnexpectedChar(c),
                    self.make_span(),
                ));
            }
        };

        Ok(self.token(kind))
    }

    /// Scans until the first token that is not whitespace or a newline,
    /// `Eof` included.
    pub fn next_significant(&mut self) -> LexResult<Token<'a>> {
        loop {
            let token = self.scan()?;
            if token.kind.is_significant() {
                return Ok(token);
            }
        }
    }
}

/// Lazy single-pass stream of significant tokens, ending before `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_significant() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            item => Some(item),
        }
    }
}
