use polspan::Span;
use poltree::Expr;
use thiserror::Error;

use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::postfix::PostfixError;

pub mod lexer;
pub mod parser;
pub mod postfix;
pub mod token;

/// Any failure the pipeline can stop on. The first error aborts the whole
/// run; there is no recovery and no partial result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Postfix(#[from] PostfixError),
}

impl Error {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span,
            Self::Parse(err) => err.span,
            Self::Postfix(err) => err.span,
        }
    }
}

/// Parses one prefix expression, ignoring whatever follows it.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse_expr()
}

/// Parses one prefix expression and requires the input to end there.
pub fn parse_complete(input: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(Lexer::new(input));
    let expr = parser.parse_expr()?;
    parser.finish()?;
    Ok(expr)
}
