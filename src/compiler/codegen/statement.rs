use crate::{
    ast::{Expr, PrintArg, Stmt},
    error::CompileError,
    compiler::codegen::core::{Codegen, CompileResult},
    vm::{
        fridge::Mode,
        instr::{Instr, Operand, PrintOperand},
    },
};

impl Codegen {
    /// Compiles a single statement.
    ///
    /// Declarations and assignments store the computed value into the
    /// variable's memory slot; `if` and `while` lower to compare-and-jump
    /// patterns with generated labels; the fridge commands emit their
    /// dedicated instructions.
    ///
    /// # Parameters
    /// - `statement`: Statement to lower.
    ///
    /// # Errors
    /// Returns a [`CompileError`] for undeclared or redeclared variables
    /// and for invalid mode names.
    pub(crate) fn compile_statement(&mut self, statement: &Stmt) -> CompileResult<()> {
        match statement {
            Stmt::VariableDeclaration { name, value, line } => {
                let slot = self.declare(name, *line)?;
                self.store_expr(value, slot)
            },
            Stmt::Assignment { name, value, line } => {
                let slot = self.slot(name)
                               .ok_or_else(|| CompileError::AssignmentToUndeclared { name:
                                                                                         name.clone(),
                                                                                     line: *line, })?;
                self.store_expr(value, slot)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.compile_if(condition, then_branch, else_branch.as_deref()),
            Stmt::While { condition, body, .. } => self.compile_while(condition, body),
            Stmt::SetTemp { value, .. } => {
                self.compile_expr(value)?;
                self.emit(Instr::Pop(Operand::R0));
                self.emit(Instr::SetTemp(Operand::R0));
                Ok(())
            },
            Stmt::SetMode { mode, line } => {
                let mode = Mode::from_name(mode).ok_or_else(|| CompileError::InvalidMode { mode: mode.clone(),
                                                                                           line: *line, })?;
                self.emit(Instr::SetMode(mode));
                Ok(())
            },
            Stmt::AddItem { item, .. } => {
                self.emit(Instr::AddItem(item.clone()));
                Ok(())
            },
            Stmt::RemoveItem { item, .. } => {
                self.emit(Instr::RemoveItem(item.clone()));
                Ok(())
            },
            Stmt::Print { arg: PrintArg::Text(text), .. } => {
                self.emit(Instr::Print(PrintOperand::Text(text.clone())));
                Ok(())
            },
            Stmt::Print { arg: PrintArg::Value(expr), .. } => {
                self.compile_expr(expr)?;
                self.emit(Instr::Pop(Operand::R0));
                self.emit(Instr::Print(PrintOperand::Value(Operand::R0)));
                Ok(())
            },
        }
    }

    /// Compiles an expression and stores its result into a memory slot.
    fn store_expr(&mut self, value: &Expr, slot: u32) -> CompileResult<()> {
        self.compile_expr(value)?;
        self.emit(Instr::Pop(Operand::R0));
        self.emit(Instr::Store(Operand::R0, Operand::Var(slot)));
        Ok(())
    }

    /// Compiles the condition of an `if` or `while` and the jump taken when
    /// it is false.
    ///
    /// The condition value is popped into `R0` and compared against 0; any
    /// non-zero value counts as true, so the emitted `JE` skips the body
    /// exactly when the condition is 0.
    fn compile_condition(&mut self, condition: &Expr, false_label: &str) -> CompileResult<()> {
        self.compile_expr(condition)?;
        self.emit(Instr::Pop(Operand::R0));
        self.emit(Instr::Cmp(Operand::R0, Operand::Imm(0)));
        self.emit(Instr::Je(false_label.to_string()));
        Ok(())
    }

    /// Compiles an `if` statement, with or without an `else` branch.
    fn compile_if(&mut self,
                  condition: &Expr,
                  then_branch: &[Stmt],
                  else_branch: Option<&[Stmt]>)
                  -> CompileResult<()> {
        let end_label = self.fresh_label("endif");

        match else_branch {
            Some(else_branch) => {
                let else_label = self.fresh_label("else");
                self.compile_condition(condition, &else_label)?;
                self.compile_body(then_branch)?;
                self.emit(Instr::Jmp(end_label.clone()));
                self.emit(Instr::Label(else_label));
                self.compile_body(else_branch)?;
            },
            None => {
                self.compile_condition(condition, &end_label)?;
                self.compile_body(then_branch)?;
            },
        }

        self.emit(Instr::Label(end_label));
        Ok(())
    }

    /// Compiles a `while` loop.
    fn compile_while(&mut self, condition: &Expr, body: &[Stmt]) -> CompileResult<()> {
        let top_label = self.fresh_label("loop");
        let end_label = self.fresh_label("endloop");

        self.emit(Instr::Label(top_label.clone()));
        self.compile_condition(condition, &end_label)?;
        self.compile_body(body)?;
        self.emit(Instr::Jmp(top_label));
        self.emit(Instr::Label(end_label));
        Ok(())
    }

    /// Compiles a statement list.
    fn compile_body(&mut self, statements: &[Stmt]) -> CompileResult<()> {
        for statement in statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }
}
