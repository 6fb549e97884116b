use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    compiler::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block: a brace-delimited statement list.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Parsing continues until a closing `}` token is encountered.
/// Leading and trailing newlines inside the block are ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements contained in the block.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement
/// fails to parse, or the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBrace, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '{{', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let mut statements = Vec::new();

    loop {
        while let Some((Token::NewLine, _)) = tokens.peek() {
            tokens.next();
        }

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::ExpectedClosingBrace { line }),
        }
    }

    Ok(statements)
}
