use std::iter::Peekable;

use crate::{
    ast::{PrintArg, Stmt},
    error::ParseError,
    compiler::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{is_reserved_identifier, parse_identifier, parse_string_operand},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration (`var x = ...`),
/// - an assignment (`x = ...`),
/// - an `if` statement with optional `else`,
/// - a `while` loop,
/// - a fridge command (`set_temp`, `set_mode`, `add_item`, `remove_item`),
/// - a `print` statement.
///
/// The dispatch is driven by the leading token; anything else is a syntax
/// error (the language has no bare expression statements).
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Var, _) => parse_variable_declaration(tokens),
        (Token::If, _) => parse_if(tokens),
        (Token::While, _) => parse_while(tokens),
        (Token::SetTemp, _) => parse_set_temp(tokens),
        (Token::SetMode, _) => parse_set_mode(tokens),
        (Token::AddItem, _) => parse_add_item(tokens),
        (Token::RemoveItem, _) => parse_remove_item(tokens),
        (Token::Print, _) => parse_print(tokens),
        (Token::Identifier(_), _) => parse_assignment(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> = <expression>`.
///
/// The identifier must not be a reserved sensor name.
/// After the `=` token, a full expression is parsed as the initializer.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `var`.
///
/// # Returns
/// A `Stmt::VariableDeclaration` node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - `=` is missing,
/// - the expression is malformed,
/// - input ends unexpectedly.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Var, line)) => *line,
        _ => unreachable!(),
    };

    let name = parse_identifier(tokens)?;
    if is_reserved_identifier(&name) {
        return Err(ParseError::IdentifierReserved { name, line });
    }

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
    }

    let value = parse_expression(tokens)?;
    Ok(Stmt::VariableDeclaration { name, value, line })
}

/// Parses an assignment statement.
///
/// Supported form: `<identifier> = <expression>`.
///
/// Reserved sensor names cannot be assigned to. Whether the variable was
/// declared is checked later by the code generator.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `Stmt::Assignment` node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - the `=` is missing,
/// - the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!(),
    };

    if is_reserved_identifier(&name) {
        return Err(ParseError::IdentifierReserved { name, line });
    }

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let value = parse_expression(tokens)?;
    Ok(Stmt::Assignment { name, value, line })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if <condition> { <statements> }
///     else if <condition> { <statements> }
///     else { <statements> }
/// ```
/// Nested `else if` constructs are parsed recursively; each becomes an `If`
/// statement inside the outer `else` branch. The `else` keyword may appear
/// on the same line as the closing brace or on a following line.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A `Stmt::If` node representing the full conditional.
///
/// # Errors
/// - `UnexpectedToken` if a brace or the `if` body is missing.
/// - Propagates any errors from condition or body parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::If, line)) => *line,
        _ => unreachable!(),
    };

    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    // An else may start on the line after the closing brace. Newlines
    // consumed here would be skipped as statement separators anyway.
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, _)) => Some(vec![parse_if(tokens)?]),
                Some((Token::LBrace, _)) => Some(parse_block(tokens)?),
                Some((tok, l)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected 'if' or '{{' after else, found {tok:?}"),
                                                             line:  *l, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            }
        },

        _ => None,
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `while` loop.
///
/// Syntax: `while <condition> { <statements> }`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A `Stmt::While` node.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::While, line)) => *line,
        _ => unreachable!(),
    };

    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Stmt::While { condition, body, line })
}

/// Parses a `set_temp` command: `set_temp <expression>`.
fn parse_set_temp<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::SetTemp, line)) => *line,
        _ => unreachable!(),
    };

    let value = parse_expression(tokens)?;
    Ok(Stmt::SetTemp { value, line })
}

/// Parses a `set_mode` command: `set_mode <string>`.
///
/// Whether the string names a valid mode is checked by the code generator.
fn parse_set_mode<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::SetMode, line)) => *line,
        _ => unreachable!(),
    };

    let mode = parse_string_operand(tokens, "set_mode")?;
    Ok(Stmt::SetMode { mode, line })
}

/// Parses an `add_item` command: `add_item <string>`.
fn parse_add_item<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::AddItem, line)) => *line,
        _ => unreachable!(),
    };

    let item = parse_string_operand(tokens, "add_item")?;
    Ok(Stmt::AddItem { item, line })
}

/// Parses a `remove_item` command: `remove_item <string>`.
fn parse_remove_item<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::RemoveItem, line)) => *line,
        _ => unreachable!(),
    };

    let item = parse_string_operand(tokens, "remove_item")?;
    Ok(Stmt::RemoveItem { item, line })
}

/// Parses a `print` statement.
///
/// A string literal operand prints verbatim text; any other operand is
/// parsed as an expression whose value is printed.
///
/// Syntax: `print <string>` or `print <expression>`
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Print, line)) => *line,
        _ => unreachable!(),
    };

    let arg = if let Some((Token::Str(text), _)) = tokens.peek() {
        let text = text.clone();
        tokens.next();
        PrintArg::Text(text)
    } else {
        PrintArg::Value(parse_expression(tokens)?)
    };

    Ok(Stmt::Print { arg, line })
}
