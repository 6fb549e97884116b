/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of compilation. Each token reports the numeric code of
/// the historical parser interface via [`lexer::Token::code`].
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric, string, and boolean literals, identifiers, and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the code generator to lower user programs
/// to fridge assembly.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports arithmetic, comparisons, control flow, and fridge commands.
pub mod parser;
/// The code generator lowers the AST to fridge assembly.
///
/// Expressions compile to stack code routed through the scratch registers,
/// control flow compiles to compare-and-jump patterns with generated
/// labels, and each declared variable is assigned a distinct memory slot.
///
/// # Responsibilities
/// - Lowers every statement and expression to the machine's instruction
///   set.
/// - Tracks variable declarations and rejects undeclared or redeclared
///   names.
/// - Emits a trailing `HALT` so the machine stops cleanly.
pub mod codegen;
