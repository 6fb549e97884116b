use std::iter::Peekable;

use crate::{
    ast::{Expr, Literal, UnaryOperator},
    error::ParseError,
    compiler::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
    vm::instr::Sensor,
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Unary operators are
/// right-associative, so `--x` parses as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and boolean literals
/// - identifiers (variables or sensor reads)
/// - parenthesized expressions
///
/// The reserved identifiers `door`, `energy`, and `outside_temp` become
/// sensor reads; every other identifier is a variable reference.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(..) | Token::Bool(..), _) => parse_literal(tokens),
        (Token::Identifier(_), _) => parse_identifier_expr(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a numeric or boolean literal into an [`Expr::Literal`].
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: Literal::Number(*n),
                                                             line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: Literal::Bool(*b),
                                                           line:  *line, }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an identifier into a variable reference or a sensor read.
fn parse_identifier_expr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => {
            if let Some(sensor) = Sensor::from_source_name(name) {
                Ok(Expr::Sensor { sensor, line: *line })
            } else {
                Ok(Expr::Variable { name: name.clone(),
                                    line: *line, })
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ')', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
