#[derive(Debug)]
/// Represents all errors that can occur while lowering a program to fridge
/// assembly.
pub enum CompileError {
    /// Tried to use a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists.
    VariableRedeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable that was never declared.
    AssignmentToUndeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operand of `set_mode` does not name a valid operating mode.
    InvalidMode {
        /// The mode string as written in the source.
        mode: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::VariableRedeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is already declared.")
            },

            Self::AssignmentToUndeclared { name, line } => write!(f,
                                                                  "Error on line {line}: Assignment to undeclared variable '{name}'."),

            Self::InvalidMode { mode, line } => write!(f,
                                                       "Error on line {line}: Invalid mode '{mode}'. Expected NORMAL, ECO or TURBO."),
        }
    }
}

impl std::error::Error for CompileError {}
