//! # fridgescript
//!
//! fridgescript is a small scripting language for a simulated refrigerator,
//! written in Rust. Scripts can set the target temperature, switch the
//! operating mode, add and remove stored items, read sensors, and use
//! variables, arithmetic, comparisons, conditionals, and loops. Programs
//! compile to a small assembly language which a bundled virtual machine
//! executes against the simulated fridge.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    compiler::{
        codegen::core::compile_program,
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
    },
    vm::{instr::Program, machine::Machine},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and lowered by the code generator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Models the literal payload (number, string, or boolean) a token can
///   carry.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, code generation, assembly parsing, or execution. It
/// standardizes error reporting and carries detailed information about
/// failures, including source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, code generator,
///   assembly parser, machine).
/// - Attaches line numbers or instruction indices and detailed messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns source code into executable fridge assembly.
///
/// This module ties together lexing, parsing, and code generation to
/// compile fridgescript programs down to the instruction set the virtual
/// machine executes.
///
/// # Responsibilities
/// - Coordinates the compilation pipeline: lexer, parser, code generator.
/// - Provides the token set and its stable numeric codes.
/// - Manages the flow of data and errors between phases.
pub mod compiler;
/// Executes fridge assembly against simulated fridge state.
///
/// This module defines the instruction set, the textual assembly form, the
/// simulated fridge (registers, items, sensors), and the machine that
/// drives execution.
///
/// # Responsibilities
/// - Defines instructions, operands, and programs.
/// - Parses and formats the textual assembly form.
/// - Runs programs with a bounded step budget and collects their output.
pub mod vm;

/// Compiles fridgescript source code to a fridge assembly program.
///
/// The source is tokenized, parsed into an AST, and lowered to the
/// instruction set. The resulting program can be run with a
/// [`Machine`], or formatted to textual assembly via its `Display`
/// implementation.
///
/// # Errors
/// Returns an error if the source contains invalid tokens, syntax errors,
/// or code generation errors such as undeclared variables.
///
/// # Examples
/// ```
/// use fridgescript::compile;
///
/// let program = compile("set_temp 2 + 2").unwrap();
/// assert!(program.to_string().contains("SET_TEMP R0"));
///
/// // 'x' is never declared.
/// assert!(compile("set_temp x").is_err());
/// ```
pub fn compile(source: &str) -> Result<Program, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();
    let statements = parse_program(&mut iter)?;

    Ok(compile_program(&statements)?)
}

/// Compiles and runs a fridgescript program, returning the machine in its
/// final state.
///
/// The fridge state, collected output, and step count can be inspected on
/// the returned [`Machine`].
///
/// # Errors
/// Returns an error if compilation fails, or if execution raises a runtime
/// error or exceeds `max_steps`.
///
/// # Examples
/// ```
/// use fridgescript::run_source;
///
/// let machine = run_source("var t = 8 - 3\nset_temp t", 10_000).unwrap();
/// assert_eq!(machine.fridge.temp, 5);
/// ```
pub fn run_source(source: &str, max_steps: usize) -> Result<Machine, Box<dyn std::error::Error>> {
    let program = compile(source)?;
    let mut machine = Machine::new(program)?;
    machine.run(max_steps)?;
    Ok(machine)
}

/// Parses and runs a textual fridge assembly program, returning the
/// machine in its final state.
///
/// # Errors
/// Returns an error if the assembly does not parse, or if execution raises
/// a runtime error or exceeds `max_steps`.
///
/// # Examples
/// ```
/// use fridgescript::run_assembly;
///
/// let machine = run_assembly("SET_TEMP 3\nHALT", 100).unwrap();
/// assert_eq!(machine.fridge.temp, 3);
/// ```
pub fn run_assembly(text: &str, max_steps: usize) -> Result<Machine, Box<dyn std::error::Error>> {
    let program = vm::asm::parse(text)?;
    let mut machine = Machine::new(program)?;
    machine.run(max_steps)?;
    Ok(machine)
}
