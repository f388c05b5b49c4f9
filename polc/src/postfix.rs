use polspan::{Span, Spanned};
use poltree::EvalErrorKind;

use crate::Error;
use crate::lexer::Lexer;
use crate::token::TokenKind;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixErrorKind {
    #[error("unexpected token: {0}")]
    UnexpectedToken(TokenKind),
    #[error("number is out of range")]
    NumberOutOfRange,
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("expression leaves extra values behind")]
    TrailingOperand,
    #[error("division by zero")]
    DivisionByZero,
}

pub type PostfixError = Spanned<PostfixErrorKind>;

impl From<EvalErrorKind> for PostfixErrorKind {
    fn from(kind: EvalErrorKind) -> Self {
        match kind {
            EvalErrorKind::DivisionByZero => Self::DivisionByZero,
        }
    }
}

/// Evaluates a postfix (reverse Polish) expression straight off the token
/// stream, without building a tree.
///
/// Numbers are pushed on a value stack; each operator pops its two
/// operands and pushes the result. A well-formed expression reduces the
/// stack to exactly one value at the end of input.
pub fn eval_postfix(lexer: Lexer<'_>) -> Result<i64, Error> {
    let mut stack = Vec::new();
    let mut end = Span::default();

    for item in lexer {
        let token = item?;
        end = token.span;

        if token.kind == TokenKind::Number {
            let value = token.text.parse().map_err(|_| {
                PostfixError::new(PostfixErrorKind::NumberOutOfRange, token.span)
            })?;
            stack.push(value);
            continue;
        }

        let Some(op) = token.kind.operator() else {
            let kind = PostfixErrorKind::UnexpectedToken(token.kind);
            return Err(PostfixError::new(kind, token.span).into());
        };

        let Some(rhs) = stack.pop() else {
            let kind = PostfixErrorKind::MissingOperand;
            return Err(PostfixError::new(kind, token.span).into());
        };
        let Some(lhs) = stack.pop() else {
            let kind = PostfixErrorKind::MissingOperand;
            return Err(PostfixError::new(kind, token.span).into());
        };

        let value = op
            .apply(lhs, rhs)
            .map_err(|kind| PostfixError::new(kind.into(), token.span))?;
        stack.push(value);
    }

    let Some(value) = stack.pop() else {
        return Err(PostfixError::new(PostfixErrorKind::MissingOperand, end).into());
    };

    if stack.is_empty() {
        Ok(value)
    } else {
        Err(PostfixError::new(PostfixErrorKind::TrailingOperand, end).into())
    }
}
