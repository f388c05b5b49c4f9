use std::fmt::{Display, Write as _};

use polspan::Spanned;

use crate::{EvalError, EvalErrorKind, EvalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to two already-evaluated operands.
    ///
    /// Addition, subtraction and multiplication wrap on the native integer
    /// range; division is checked and fails on a zero divisor.
    pub const fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalErrorKind> {
        match self {
            Self::Add => Ok(lhs.wrapping_add(rhs)),
            Self::Sub => Ok(lhs.wrapping_sub(rhs)),
            Self::Mul => Ok(lhs.wrapping_mul(rhs)),
            Self::Div => match lhs.checked_div(rhs) {
                Some(value) => Ok(value),
                None => Err(EvalErrorKind::DivisionByZero),
            },
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Num(i64),

    Bin {
        op:  BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

pub type Expr = Spanned<ExprKind>;

/// Evaluates the tree bottom up.
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    match &expr.kind {
        ExprKind::Num(value) => Ok(*value),
        ExprKind::Bin { op, lhs, rhs } => {
            let lhs = eval(lhs)?;
            let rhs = eval(rhs)?;
            op.apply(lhs, rhs)
                .map_err(|kind| EvalError::new(kind, expr.span))
        }
    }
}

impl ExprKind {
    #[must_use]
    pub fn to_prefix(&self) -> String {
        let mut out = String::new();
        self.write_prefix(&mut out);
        out
    }

    #[must_use]
    pub fn to_postfix(&self) -> String {
        let mut out = String::new();
        self.write_postfix(&mut out);
        out
    }

    fn write_prefix(&self, out: &mut String) {
        match self {
            Self::Num(value) => {
                let _ = write!(out, "{value}");
            }
            Self::Bin { op, lhs, rhs } => {
                let _ = write!(out, "{op} ");
                lhs.kind.write_prefix(out);
                out.push(' ');
                rhs.kind.write_prefix(out);
            }
        }
    }

    fn write_postfix(&self, out: &mut String) {
        match self {
            Self::Num(value) => {
                let _ = write!(out, "{value}");
            }
            Self::Bin { op, lhs, rhs } => {
                lhs.kind.write_postfix(out);
                out.push(' ');
                rhs.kind.write_postfix(out);
                let _ = write!(out, " {op}");
            }
        }
    }
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::Bin { op, lhs, rhs } => write!(f, "({}{op}{})", lhs.kind, rhs.kind),
        }
    }
}
