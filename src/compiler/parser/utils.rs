use std::iter::Peekable;

use crate::{
    error::ParseError,
    compiler::{lexer::Token, parser::core::ParseResult},
    vm::instr::Sensor,
};

/// Returns `true` if the name is reserved and cannot be declared or
/// assigned.
///
/// The reserved names are the read-only sensors: `door`, `energy`, and
/// `outside_temp`.
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    Sensor::from_source_name(name).is_some()
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
/// This function does not check for reserved identifiers; callers must
/// handle that.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::compiler::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the string operand of a fridge command.
///
/// The next token must be `Token::Str`; `command` names the command for
/// error reporting.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a string literal.
/// - `command`: The command requiring the operand (e.g. `"add_item"`).
///
/// # Returns
/// The string contents, without quotes.
///
/// # Errors
/// Returns [`ParseError::ExpectedString`] if the next token is not a string
/// literal.
pub(in crate::compiler::parser) fn parse_string_operand<'a, I>(tokens: &mut Peekable<I>,
                                                               command: &str)
                                                               -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Str(s), _)) => Ok(s.clone()),
        Some((_, line)) => Err(ParseError::ExpectedString { command: command.to_string(),
                                                            line:    *line, }),
        None => Err(ParseError::ExpectedString { command: command.to_string(),
                                                 line:    0, }),
    }
}
