pub mod expr;

pub use expr::{BinOp, Expr, ExprKind, eval};

use polspan::Spanned;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("division by zero")]
    DivisionByZero,
}

pub type EvalError = Spanned<EvalErrorKind>;
pub type EvalResult<T> = Result<T, EvalError>;
