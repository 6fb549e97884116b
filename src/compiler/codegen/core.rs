use std::collections::HashMap;

use crate::{
    ast::Stmt,
    error::CompileError,
    vm::instr::{Instr, Program},
};

/// Result type used by the code generator.
///
/// All lowering functions return either a value of type `T` or a
/// `CompileError` describing the failure.
pub type CompileResult<T> = Result<T, CompileError>;

/// Holds the state of one lowering run.
///
/// This struct tracks the mapping from declared variable names to their
/// `VAR_n` memory slots, the counter used to generate fresh jump labels,
/// and the instruction buffer the program is emitted into.
///
/// ## Usage
///
/// A `Codegen` is created per program by [`compile_program`], which lowers
/// every statement in order and terminates the instruction stream with
/// `HALT`.
pub struct Codegen {
    /// Declared variables, mapped to their memory slots.
    vars:       HashMap<String, u32>,
    /// Counter for generating distinct jump labels.
    next_label: u32,
    /// The instructions emitted so far.
    instrs:     Vec<Instr>,
}

/// Lowers a parsed program to fridge assembly.
///
/// Statements are compiled in order; the resulting instruction stream
/// always ends with `HALT` so the machine stops cleanly.
///
/// # Parameters
/// - `statements`: The top-level statements of the program.
///
/// # Returns
/// The compiled [`Program`].
///
/// # Errors
/// Returns a [`CompileError`] if a statement references an undeclared
/// variable, redeclares an existing one, or names an invalid mode.
pub fn compile_program(statements: &[Stmt]) -> CompileResult<Program> {
    let mut codegen = Codegen { vars:       HashMap::new(),
                                next_label: 0,
                                instrs:     Vec::new(), };

    for statement in statements {
        codegen.compile_statement(statement)?;
    }
    codegen.emit(Instr::Halt);

    Ok(Program { instrs: codegen.instrs })
}

impl Codegen {
    /// Appends an instruction to the program being built.
    pub(crate) fn emit(&mut self, instr: Instr) {
        self.instrs.push(instr);
    }

    /// Returns a fresh, program-unique jump label.
    ///
    /// The hint names the construct the label belongs to, so the generated
    /// assembly stays readable (`else_0`, `loop_2`, ...).
    pub(crate) fn fresh_label(&mut self, hint: &str) -> String {
        let label = format!("{hint}_{}", self.next_label);
        self.next_label += 1;
        label
    }

    /// Declares a variable and allocates its memory slot.
    ///
    /// # Errors
    /// Returns [`CompileError::VariableRedeclared`] if the name is already
    /// declared.
    pub(crate) fn declare(&mut self, name: &str, line: usize) -> CompileResult<u32> {
        if self.vars.contains_key(name) {
            return Err(CompileError::VariableRedeclared { name: name.to_string(),
                                                          line });
        }

        let slot = self.vars.len() as u32;
        self.vars.insert(name.to_string(), slot);
        Ok(slot)
    }

    /// Looks up the memory slot of a declared variable.
    pub(crate) fn slot(&self, name: &str) -> Option<u32> {
        self.vars.get(name).copied()
    }
}
