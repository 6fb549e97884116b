/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals, and any other issues detected before code generation.
pub mod parse_error;
/// Code generation errors.
///
/// Contains the error types that can be raised while lowering a parsed
/// program to fridge assembly, such as references to undeclared variables.
pub mod compile_error;
/// Runtime errors.
///
/// Contains all error types that can be raised by the virtual machine while
/// executing a program, such as division by zero or stack underflow.
pub mod runtime_error;
/// Assembly errors.
///
/// Defines the error types produced while parsing the textual fridge
/// assembly form.
pub mod asm_error;

pub use asm_error::AsmError;
pub use compile_error::CompileError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
