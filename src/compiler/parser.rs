/// Core parsing entry points.
///
/// Contains the expression entry point and the whole-program loop, along
/// with shared error propagation.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparisons, addition, and
/// multiplication.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables, sensor reads, and grouping.
pub mod unary;

/// Statement parsing.
///
/// Implements declarations, assignments, control flow, and the fridge
/// commands.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement lists, managing newline separators.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for identifiers, string operands, and reserved-name
/// checks.
pub mod utils;
