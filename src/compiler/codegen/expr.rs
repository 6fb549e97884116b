use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::CompileError,
    compiler::codegen::core::{Codegen, CompileResult},
    vm::instr::{Instr, Operand},
};

impl Codegen {
    /// Compiles an expression to stack code.
    ///
    /// The generated sequence leaves exactly one value on the operand
    /// stack: the expression's result. Binary operations pop their two
    /// operands into `R1` and `R0` (right, then left), compute in place on
    /// `R0`, and push the result back. Comparisons materialize 0 or 1 via
    /// `CMP` and a conditional jump.
    ///
    /// # Parameters
    /// - `expr`: Expression to lower.
    ///
    /// # Returns
    /// `Ok(())` once the instructions have been emitted.
    ///
    /// # Errors
    /// Returns [`CompileError::UnknownVariable`] for references to
    /// variables that were never declared.
    pub(crate) fn compile_expr(&mut self, expr: &Expr) -> CompileResult<()> {
        match expr {
            Expr::Literal { value, .. } => {
                match value.as_number() {
                    Some(n) => self.emit(Instr::Push(Operand::Imm(n))),
                    // The parser only places strings in command operands.
                    None => unreachable!(),
                }
                Ok(())
            },
            Expr::Variable { name, line } => {
                let slot = self.slot(name)
                               .ok_or_else(|| CompileError::UnknownVariable { name: name.clone(),
                                                                              line: *line, })?;
                self.emit(Instr::Push(Operand::Var(slot)));
                Ok(())
            },
            Expr::Sensor { sensor, .. } => {
                self.emit(Instr::CheckSensor(*sensor));
                self.emit(Instr::Push(Operand::R0));
                Ok(())
            },
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => {
                // Negation compiles as 0 - expr.
                self.emit(Instr::Push(Operand::Imm(0)));
                self.compile_expr(expr)?;
                self.pop_operands();
                self.emit(Instr::Sub(Operand::R0, Operand::R1));
                self.emit(Instr::Push(Operand::R0));
                Ok(())
            },
            Expr::BinaryOp { left, op, right, .. } => {
                self.compile_expr(left)?;
                self.compile_expr(right)?;
                self.pop_operands();

                if op.is_comparison() {
                    self.compile_comparison(*op);
                } else {
                    let instr = match op {
                        BinaryOperator::Add => Instr::Add(Operand::R0, Operand::R1),
                        BinaryOperator::Sub => Instr::Sub(Operand::R0, Operand::R1),
                        BinaryOperator::Mul => Instr::Mul(Operand::R0, Operand::R1),
                        BinaryOperator::Div => Instr::Div(Operand::R0, Operand::R1),
                        _ => unreachable!(),
                    };
                    self.emit(instr);
                    self.emit(Instr::Push(Operand::R0));
                }
                Ok(())
            },
        }
    }

    /// Pops the two topmost stack values into the scratch registers: the
    /// right operand into `R1`, then the left operand into `R0`.
    fn pop_operands(&mut self) {
        self.emit(Instr::Pop(Operand::R1));
        self.emit(Instr::Pop(Operand::R0));
    }

    /// Materializes a comparison between `R0` and `R1` as 0 or 1 on the
    /// stack.
    ///
    /// Emits `CMP R0, R1` followed by the matching conditional jump to a
    /// "push 1" branch, with a "push 0" fall-through.
    fn compile_comparison(&mut self, op: BinaryOperator) {
        let true_label = self.fresh_label("true");
        let end_label = self.fresh_label("end");

        self.emit(Instr::Cmp(Operand::R0, Operand::R1));
        let jump = match op {
            BinaryOperator::Equal => Instr::Je(true_label.clone()),
            BinaryOperator::NotEqual => Instr::Jne(true_label.clone()),
            BinaryOperator::Less => Instr::Jl(true_label.clone()),
            BinaryOperator::Greater => Instr::Jg(true_label.clone()),
            BinaryOperator::LessEqual => Instr::Jle(true_label.clone()),
            BinaryOperator::GreaterEqual => Instr::Jge(true_label.clone()),
            _ => unreachable!(),
        };
        self.emit(jump);
        self.emit(Instr::Push(Operand::Imm(0)));
        self.emit(Instr::Jmp(end_label.clone()));
        self.emit(Instr::Label(true_label));
        self.emit(Instr::Push(Operand::Imm(1)));
        self.emit(Instr::Label(end_label));
    }
}
