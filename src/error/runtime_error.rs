#[derive(Debug)]
/// Represents all errors that can occur while the virtual machine executes a
/// program.
pub enum RuntimeError {
    /// Tried to pop from an empty operand stack.
    StackUnderflow {
        /// The index of the offending instruction.
        pc: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The index of the offending instruction.
        pc: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The index of the offending instruction.
        pc: usize,
    },
    /// A jump targeted a label that is not defined anywhere in the program.
    UnknownLabel {
        /// The name of the missing label.
        name: String,
    },
    /// Tried to write to an operand that cannot hold a value, such as an
    /// integer literal.
    ReadOnlyOperand {
        /// The index of the offending instruction.
        pc: usize,
    },
    /// The program exceeded the configured step limit without halting.
    StepLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { pc } => {
                write!(f, "Error at instruction {pc}: Stack underflow.")
            },

            Self::DivisionByZero { pc } => {
                write!(f, "Error at instruction {pc}: Division by zero.")
            },

            Self::Overflow { pc } => write!(f,
                                            "Error at instruction {pc}: Integer overflow while trying to compute result."),

            Self::UnknownLabel { name } => {
                write!(f, "Jump to unknown label '{name}'.")
            },

            Self::ReadOnlyOperand { pc } => {
                write!(f, "Error at instruction {pc}: Operand cannot be written to.")
            },

            Self::StepLimitExceeded { limit } => {
                write!(f, "Program did not halt within {limit} steps.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
