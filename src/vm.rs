/// The fridge assembly instruction set.
///
/// Defines the `Instr` and `Operand` types shared by the code generator,
/// the assembly parser, and the machine, together with their textual form.
pub mod instr;

/// Simulated fridge state.
///
/// Defines the fridge registers (temperature and operating mode), the item
/// list, and the read-only sensor block.
pub mod fridge;

/// The virtual machine.
///
/// Holds the execution state (registers, memory, stack, flags, program
/// counter) and drives instruction execution.
pub mod machine;

/// Textual assembly support.
///
/// Parses the line-oriented assembly form into a `Program`, mirroring the
/// format the machine's `Display` implementation produces.
pub mod asm;
