#[derive(Debug)]
/// Represents all errors that can occur while parsing textual fridge
/// assembly.
pub enum AsmError {
    /// Encountered an opcode that is not part of the instruction set.
    UnknownOpcode {
        /// The opcode as written in the source.
        opcode: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An instruction was given the wrong number of operands.
    OperandCountMismatch {
        /// The opcode of the instruction.
        opcode: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An operand could not be interpreted as a literal, register, or
    /// memory slot.
    InvalidOperand {
        /// The operand as written in the source.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `SET_MODE` instruction named an unknown operating mode.
    InvalidMode {
        /// The mode as written in the source.
        mode: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `CHECK_SENSOR` instruction named an unknown sensor.
    InvalidSensor {
        /// The sensor as written in the source.
        sensor: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for AsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOpcode { opcode, line } => {
                write!(f, "Error on line {line}: Unknown opcode '{opcode}'.")
            },

            Self::OperandCountMismatch { opcode, line } => {
                write!(f, "Error on line {line}: Wrong number of operands for '{opcode}'.")
            },

            Self::InvalidOperand { operand, line } => {
                write!(f, "Error on line {line}: Invalid operand '{operand}'.")
            },

            Self::InvalidMode { mode, line } => write!(f,
                                                       "Error on line {line}: Invalid mode '{mode}'. Expected NORMAL, ECO or TURBO."),

            Self::InvalidSensor { sensor, line } => write!(f,
                                                           "Error on line {line}: Invalid sensor '{sensor}'. Expected DOOR, ENERGY or OUTSIDE_TEMP."),
        }
    }
}

impl std::error::Error for AsmError {}
