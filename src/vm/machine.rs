use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    vm::{
        fridge::{Fridge, Sensors},
        instr::{Instr, Operand, PrintOperand, Program, Sensor},
    },
};

/// Default execution budget for [`Machine::run`].
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// The comparison flags set by `CMP` and tested by conditional jumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    equal:   bool,
    less:    bool,
    greater: bool,
}

/// The result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Execution can continue with the next instruction.
    Continue,
    /// The program halted, either via `HALT` or by running off the end.
    Halted,
}

/// The fridge virtual machine.
///
/// Holds a loaded program together with all execution state: the scratch
/// registers `R0` and `R1`, variable memory, the operand stack, the
/// comparison flags, the program counter, and the simulated fridge itself.
///
/// ## Usage
///
/// A `Machine` is built from a [`Program`], optionally adjusted (sensors),
/// and then driven with [`Machine::run`] or stepped manually with
/// [`Machine::step`]. Afterwards the fridge state and collected output can
/// be inspected.
#[derive(Debug)]
pub struct Machine {
    program: Program,
    /// Label name to instruction index, resolved at load time.
    labels:  HashMap<String, usize>,
    pc:      usize,
    r0:      i64,
    r1:      i64,
    stack:   Vec<i64>,
    /// Variable memory. Slots that were never written read as 0.
    memory:  HashMap<u32, i64>,
    flags:   Flags,
    steps:   usize,
    halted:  bool,

    /// The simulated fridge the program runs against.
    pub fridge:  Fridge,
    /// The read-only sensor block. May be set before running.
    pub sensors: Sensors,
    /// Output lines collected from `PRINT` instructions.
    pub output:  Vec<String>,
}

impl Machine {
    /// Loads a program into a fresh machine.
    ///
    /// Label definitions are resolved to instruction indices up front, and
    /// every jump target is checked against them.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownLabel`] if any jump references a label
    /// the program does not define.
    pub fn new(program: Program) -> Result<Self, RuntimeError> {
        let mut labels = HashMap::new();
        for (index, instr) in program.instrs.iter().enumerate() {
            if let Instr::Label(name) = instr {
                labels.insert(name.clone(), index);
            }
        }

        for instr in &program.instrs {
            if let Some(target) = instr.jump_target()
               && !labels.contains_key(target)
            {
                return Err(RuntimeError::UnknownLabel { name: target.to_string() });
            }
        }

        Ok(Self { program,
                  labels,
                  pc: 0,
                  r0: 0,
                  r1: 0,
                  stack: Vec::new(),
                  memory: HashMap::new(),
                  flags: Flags::default(),
                  steps: 0,
                  halted: false,
                  fridge: Fridge::default(),
                  sensors: Sensors::default(),
                  output: Vec::new(), })
    }

    /// Returns the instruction the program counter currently points at, or
    /// `None` if execution has finished.
    #[must_use]
    pub fn current_instr(&self) -> Option<&Instr> {
        if self.halted {
            return None;
        }
        self.program.instrs.get(self.pc)
    }

    /// The current program counter.
    #[must_use]
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// The number of instructions executed so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// The current value of register `R0`.
    #[must_use]
    pub const fn r0(&self) -> i64 {
        self.r0
    }

    /// The current value of register `R1`.
    #[must_use]
    pub const fn r1(&self) -> i64 {
        self.r1
    }

    /// Reads a variable memory slot. Slots never written read as 0.
    #[must_use]
    pub fn memory_slot(&self, id: u32) -> i64 {
        self.memory.get(&id).copied().unwrap_or(0)
    }

    /// Reads the value of an operand.
    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Imm(n) => n,
            Operand::R0 => self.r0,
            Operand::R1 => self.r1,
            Operand::Var(id) => self.memory_slot(id),
        }
    }

    /// Writes a value to an operand.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ReadOnlyOperand`] for integer literals.
    fn write(&mut self, operand: Operand, value: i64) -> Result<(), RuntimeError> {
        match operand {
            Operand::Imm(_) => return Err(RuntimeError::ReadOnlyOperand { pc: self.pc }),
            Operand::R0 => self.r0 = value,
            Operand::R1 => self.r1 = value,
            Operand::Var(id) => {
                self.memory.insert(id, value);
            },
        }
        Ok(())
    }

    /// Pops the top of the operand stack.
    fn pop(&mut self) -> Result<i64, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { pc: self.pc })
    }

    /// Reads a sensor value as a number. The door reads as 0 or 1.
    fn sensor_value(&self, sensor: Sensor) -> i64 {
        match sensor {
            Sensor::Door => i64::from(self.sensors.door),
            Sensor::Energy => self.sensors.energy,
            Sensor::OutsideTemp => self.sensors.outside_temp,
        }
    }

    /// Executes a single instruction and advances the program counter.
    ///
    /// Taken jumps move the program counter to their target instead of
    /// advancing it. Running off the end of the program counts as halting.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for stack underflow, division by zero,
    /// arithmetic overflow, or a write to a read-only operand.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.halted || self.pc >= self.program.instrs.len() {
            self.halted = true;
            return Ok(StepOutcome::Halted);
        }

        let instr = self.program.instrs[self.pc].clone();
        self.steps += 1;

        match instr {
            Instr::Push(op) => {
                let value = self.value(op);
                self.stack.push(value);
            },
            Instr::Pop(op) => {
                let value = self.pop()?;
                self.write(op, value)?;
            },
            Instr::Load(dest, src) | Instr::Store(src, dest) => {
                let value = self.value(src);
                self.write(dest, value)?;
            },
            Instr::Add(dest, src) => self.arith(dest, src, i64::checked_add)?,
            Instr::Sub(dest, src) => self.arith(dest, src, i64::checked_sub)?,
            Instr::Mul(dest, src) => self.arith(dest, src, i64::checked_mul)?,
            Instr::Div(dest, src) => {
                if self.value(src) == 0 {
                    return Err(RuntimeError::DivisionByZero { pc: self.pc });
                }
                self.arith(dest, src, i64::checked_div)?;
            },
            Instr::Cmp(a, b) => {
                let left = self.value(a);
                let right = self.value(b);
                self.flags = Flags { equal:   left == right,
                                     less:    left < right,
                                     greater: left > right, };
            },
            Instr::Je(label) => return self.jump_if(self.flags.equal, &label),
            Instr::Jne(label) => return self.jump_if(!self.flags.equal, &label),
            Instr::Jl(label) => return self.jump_if(self.flags.less, &label),
            Instr::Jg(label) => return self.jump_if(self.flags.greater, &label),
            Instr::Jle(label) => {
                return self.jump_if(self.flags.less || self.flags.equal, &label);
            },
            Instr::Jge(label) => {
                return self.jump_if(self.flags.greater || self.flags.equal, &label);
            },
            Instr::Jmp(label) => return self.jump_if(true, &label),
            Instr::Label(_) => {},
            Instr::SetTemp(op) => self.fridge.temp = self.value(op),
            Instr::SetMode(mode) => self.fridge.mode = mode,
            Instr::AddItem(item) => self.fridge.add_item(&item),
            Instr::RemoveItem(item) => {
                self.fridge.remove_item(&item);
            },
            Instr::CheckSensor(sensor) => self.r0 = self.sensor_value(sensor),
            Instr::Print(PrintOperand::Text(text)) => self.output.push(text),
            Instr::Print(PrintOperand::Value(op)) => {
                let value = self.value(op);
                self.output.push(value.to_string());
            },
            Instr::Halt => {
                self.halted = true;
                return Ok(StepOutcome::Halted);
            },
        }

        self.pc += 1;
        Ok(StepOutcome::Continue)
    }

    /// Runs the program until it halts or the step budget is exhausted.
    ///
    /// # Errors
    /// Returns [`RuntimeError::StepLimitExceeded`] if the program does not
    /// halt within `max_steps` instructions, or any error raised by an
    /// individual instruction.
    pub fn run(&mut self, max_steps: usize) -> Result<(), RuntimeError> {
        loop {
            if self.steps >= max_steps {
                return Err(RuntimeError::StepLimitExceeded { limit: max_steps });
            }
            if self.step()? == StepOutcome::Halted {
                return Ok(());
            }
        }
    }

    /// Applies an in-place arithmetic operation to `dest`.
    fn arith(&mut self,
             dest: Operand,
             src: Operand,
             op: impl Fn(i64, i64) -> Option<i64>)
             -> Result<(), RuntimeError> {
        let left = self.value(dest);
        let right = self.value(src);
        let result = op(left, right).ok_or(RuntimeError::Overflow { pc: self.pc })?;
        self.write(dest, result)
    }

    /// Executes a jump, taken or not.
    fn jump_if(&mut self, taken: bool, label: &str) -> Result<StepOutcome, RuntimeError> {
        if taken {
            // Verified at load time, so the lookup cannot fail.
            self.pc = self.labels[label];
        } else {
            self.pc += 1;
        }
        Ok(StepOutcome::Continue)
    }
}
