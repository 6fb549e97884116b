/// Core lowering state and the program entry point.
///
/// Contains the `Codegen` struct, variable slot allocation, label
/// generation, and instruction emission.
pub mod core;

/// Expression lowering.
///
/// Compiles expressions to stack code routed through the scratch
/// registers, including 0/1 materialization of comparison results.
pub mod expr;

/// Statement lowering.
///
/// Compiles declarations, assignments, control flow, and the fridge
/// commands to instruction sequences.
pub mod statement;
