use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    compiler::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparisons, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}

/// Parses a whole program: a sequence of statements separated by newlines.
///
/// Leading, trailing, and separating newlines are skipped. Parsing stops at
/// the end of input.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The list of parsed top-level statements.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        while let Some((Token::NewLine, _)) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
