use polspan::Spanned;
use poltree::{Expr, ExprKind};

use crate::Error;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected token: {0}")]
    UnexpectedToken(TokenKind),
    #[error("number is out of range")]
    NumberOutOfRange,
}

pub type ParseError = Spanned<ParseErrorKind>;

/// Recursive descent over the lexer's significant-token stream.
///
/// The grammar is strict Polish prefix: `expr := NUMBER | op expr expr`.
/// Every operator takes exactly two operands, so placement alone
/// determines the tree shape.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        let token = self.lexer.next_significant()?;

        if token.kind == TokenKind::Number {
            return Self::number(token);
        }

        let Some(op) = token.kind.operator() else {
            let kind = ParseErrorKind::UnexpectedToken(token.kind);
            return Err(ParseError::new(kind, token.span).into());
        };

        // the lexer is shared state: the left operand must be consumed first
        let lhs = self.parse_expr()?;
        let rhs = self.parse_expr()?;

        let span = token.span.join(rhs.span);
        let kind = ExprKind::Bin {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
        Ok(Expr::new(kind, span))
    }

    fn number(token: Token<'a>) -> Result<Expr, Error> {
        match token.text.parse() {
            Ok(value) => Ok(Expr::new(ExprKind::Num(value), token.span)),
            Err(_) => {
                let kind = ParseErrorKind::NumberOutOfRange;
                Err(ParseError::new(kind, token.span).into())
            }
        }
    }

    /// Requires the rest of the input to hold nothing but whitespace.
    pub fn finish(&mut self) -> Result<(), Error> {
        let token = self.lexer.next_significant()?;
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            let kind = ParseErrorKind::UnexpectedToken(token.kind);
            Err(ParseError::new(kind, token.span).into())
        }
    }
}

#[cfg(test)]
mod test {
    use polspan::Span;
    use poltree::{BinOp, eval};

    use super::*;
    use crate::lexer::LexErrorKind;
    use crate::{parse, parse_complete};

    fn eval_str(input: &str) -> i64 {
        eval(&parse(input).unwrap()).unwrap()
    }

    fn parse_err(input: &str) -> ParseError {
        match parse(input).unwrap_err() {
            Error::Parse(err) => err,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn single_number_is_a_leaf() {
        let expr = parse("42").unwrap();
        assert_eq!(expr.kind, ExprKind::Num(42));
        assert_eq!(expr.span, Span::new(0, 2));
    }

    #[test]
    fn leading_zeros_read_as_decimal() {
        let expr = parse("007").unwrap();
        assert_eq!(expr.kind, ExprKind::Num(7));
    }

    #[test]
    fn operator_takes_the_next_two_expressions() {
        let expr = parse("- 10 5").unwrap();
        let ExprKind::Bin { op, lhs, rhs } = expr.kind else {
            panic!("expected a binary node");
        };
        assert_eq!(op, BinOp::Sub);
        assert_eq!(lhs.kind, ExprKind::Num(10));
        assert_eq!(rhs.kind, ExprKind::Num(5));
    }

    #[test]
    fn operand_order_follows_the_input() {
        assert_eq!(eval_str("- 10 5"), 5);
        assert_eq!(eval_str("/ 10 5"), 2);
    }

    #[test]
    fn operand_grouping_is_positional() {
        assert_eq!(eval_str("+ 3 * 4 2"), 11);
        assert_eq!(eval_str("+ * 3 4 2"), 14);
    }

    #[test]
    fn spacing_does_not_change_the_tree() {
        let compact = parse("+ 3 * 4 2").unwrap();
        let spread = parse("+\n3\n  * 4     2\n").unwrap();
        assert_eq!(compact.kind.to_prefix(), spread.kind.to_prefix());
    }

    #[test]
    fn prefix_rendering_round_trips() {
        let expr = parse("+ 3 * 4 2").unwrap();
        let rendered = expr.kind.to_prefix();
        assert_eq!(rendered, "+ 3 * 4 2");
        assert_eq!(parse(&rendered).unwrap(), expr);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_err("");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken(TokenKind::Eof)
        );
    }

    #[test]
    fn missing_operands_are_rejected() {
        let err = parse_err("+");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken(TokenKind::Eof)
        );

        let err = parse_err("+ 1");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken(TokenKind::Eof)
        );
    }

    #[test]
    fn parentheses_are_lexed_but_rejected() {
        let err = parse_err("( 1 2");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken(TokenKind::LParen)
        );
        assert_eq!(err.span, Span::new(0, 1));
    }

    #[test]
    fn lex_errors_abort_the_parse() {
        let err = parse("+ 1 @").unwrap_err();
        let Error::Lex(err) = err else {
            panic!("expected lex error, got {err:?}");
        };
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('@'));
        assert_eq!(err.span, Span::new(4, 5));
    }

    #[test]
    fn number_out_of_range_is_rejected() {
        assert_eq!(
            parse("9223372036854775807").unwrap().kind,
            ExprKind::Num(i64::MAX)
        );
        let err = parse_err("9223372036854775808");
        assert_eq!(err.kind, ParseErrorKind::NumberOutOfRange);
    }

    #[test]
    fn trailing_input_is_ignored_by_default() {
        let expr = parse("1 2").unwrap();
        assert_eq!(expr.kind, ExprKind::Num(1));
    }

    #[test]
    fn parse_complete_rejects_trailing_input() {
        let err = match parse_complete("1 2").unwrap_err() {
            Error::Parse(err) => err,
            other => panic!("expected parse error, got {other:?}"),
        };
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken(TokenKind::Number)
        );
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn parse_complete_allows_trailing_whitespace() {
        let expr = parse_complete("+ 1 2 \n").unwrap();
        assert_eq!(eval(&expr), Ok(3));
    }
}
