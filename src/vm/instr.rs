use crate::vm::fridge::Mode;

/// A single operand of a fridge assembly instruction.
///
/// Operands are the values instructions read from and write to: integer
/// literals, the two scratch registers, and numbered variable memory slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// An integer literal.
    Imm(i64),
    /// The primary scratch register.
    R0,
    /// The secondary scratch register.
    R1,
    /// A variable memory slot, written `VAR_n`.
    Var(u32),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imm(n) => write!(f, "{n}"),
            Self::R0 => write!(f, "R0"),
            Self::R1 => write!(f, "R1"),
            Self::Var(id) => write!(f, "VAR_{id}"),
        }
    }
}

/// One of the fridge's read-only sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Whether the door is open. Reads as 1 (open) or 0 (closed).
    Door,
    /// Current energy consumption in watts.
    Energy,
    /// Ambient temperature outside the fridge, in degrees Celsius.
    OutsideTemp,
}

impl Sensor {
    /// Returns the sensor named by `name` in assembly form (`DOOR`,
    /// `ENERGY`, `OUTSIDE_TEMP`), if any.
    #[must_use]
    pub fn from_asm_name(name: &str) -> Option<Self> {
        match name {
            "DOOR" => Some(Self::Door),
            "ENERGY" => Some(Self::Energy),
            "OUTSIDE_TEMP" => Some(Self::OutsideTemp),
            _ => None,
        }
    }

    /// Returns the sensor named by `name` in source form (`door`,
    /// `energy`, `outside_temp`), if any.
    #[must_use]
    pub fn from_source_name(name: &str) -> Option<Self> {
        match name {
            "door" => Some(Self::Door),
            "energy" => Some(Self::Energy),
            "outside_temp" => Some(Self::OutsideTemp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Door => "DOOR",
            Self::Energy => "ENERGY",
            Self::OutsideTemp => "OUTSIDE_TEMP",
        };
        write!(f, "{name}")
    }
}

/// The operand of a `PRINT` instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintOperand {
    /// A quoted string printed verbatim.
    Text(String),
    /// A value operand whose number is printed.
    Value(Operand),
}

impl std::fmt::Display for PrintOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Value(op) => write!(f, "{op}"),
        }
    }
}

/// A single fridge assembly instruction.
///
/// This is the contract between the code generator, the textual assembly
/// form, and the machine. Jump instructions reference labels by name; the
/// machine resolves them to instruction indices when a program is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    /// Pushes the value of the operand onto the operand stack.
    Push(Operand),
    /// Pops the top of the stack into the operand.
    Pop(Operand),
    /// Copies the value of the second operand into the first.
    Load(Operand, Operand),
    /// Stores the value of the first operand into the second.
    Store(Operand, Operand),
    /// Adds the second operand to the first, in place.
    Add(Operand, Operand),
    /// Subtracts the second operand from the first, in place.
    Sub(Operand, Operand),
    /// Multiplies the first operand by the second, in place.
    Mul(Operand, Operand),
    /// Divides the first operand by the second, in place.
    Div(Operand, Operand),
    /// Compares two operands and sets the equal/less/greater flags.
    Cmp(Operand, Operand),
    /// Jumps to the label if the equal flag is set.
    Je(String),
    /// Jumps to the label if the equal flag is clear.
    Jne(String),
    /// Jumps to the label if the less flag is set.
    Jl(String),
    /// Jumps to the label if the greater flag is set.
    Jg(String),
    /// Jumps to the label if the less or equal flag is set.
    Jle(String),
    /// Jumps to the label if the greater or equal flag is set.
    Jge(String),
    /// Jumps to the label unconditionally.
    Jmp(String),
    /// Defines a jump target. Executes as a no-op.
    Label(String),
    /// Sets the fridge's target temperature from the operand.
    SetTemp(Operand),
    /// Switches the fridge's operating mode.
    SetMode(Mode),
    /// Adds an item to the fridge.
    AddItem(String),
    /// Removes an item from the fridge. Missing items are ignored.
    RemoveItem(String),
    /// Reads a sensor into register `R0`.
    CheckSensor(Sensor),
    /// Appends a line to the program output.
    Print(PrintOperand),
    /// Stops execution.
    Halt,
}

impl Instr {
    /// Returns the label this instruction jumps to, if it is a jump.
    #[must_use]
    pub fn jump_target(&self) -> Option<&str> {
        match self {
            Self::Je(label)
            | Self::Jne(label)
            | Self::Jl(label)
            | Self::Jg(label)
            | Self::Jle(label)
            | Self::Jge(label)
            | Self::Jmp(label) => Some(label),
            _ => None,
        }
    }
}

impl std::fmt::Display for Instr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(op) => write!(f, "PUSH {op}"),
            Self::Pop(op) => write!(f, "POP {op}"),
            Self::Load(dest, src) => write!(f, "LOAD {dest}, {src}"),
            Self::Store(src, dest) => write!(f, "STORE {src}, {dest}"),
            Self::Add(dest, src) => write!(f, "ADD {dest}, {src}"),
            Self::Sub(dest, src) => write!(f, "SUB {dest}, {src}"),
            Self::Mul(dest, src) => write!(f, "MUL {dest}, {src}"),
            Self::Div(dest, src) => write!(f, "DIV {dest}, {src}"),
            Self::Cmp(a, b) => write!(f, "CMP {a}, {b}"),
            Self::Je(label) => write!(f, "JE {label}"),
            Self::Jne(label) => write!(f, "JNE {label}"),
            Self::Jl(label) => write!(f, "JL {label}"),
            Self::Jg(label) => write!(f, "JG {label}"),
            Self::Jle(label) => write!(f, "JLE {label}"),
            Self::Jge(label) => write!(f, "JGE {label}"),
            Self::Jmp(label) => write!(f, "JMP {label}"),
            Self::Label(label) => write!(f, "LABEL {label}"),
            Self::SetTemp(op) => write!(f, "SET_TEMP {op}"),
            Self::SetMode(mode) => write!(f, "SET_MODE {mode}"),
            Self::AddItem(item) => write!(f, "ADD_ITEM \"{item}\""),
            Self::RemoveItem(item) => write!(f, "REMOVE_ITEM \"{item}\""),
            Self::CheckSensor(sensor) => write!(f, "CHECK_SENSOR {sensor}"),
            Self::Print(arg) => write!(f, "PRINT {arg}"),
            Self::Halt => write!(f, "HALT"),
        }
    }
}

/// A complete fridge assembly program.
///
/// Produced by the code generator or the assembly parser and consumed by
/// the machine. The `Display` form is the textual assembly format, which
/// parses back into an equivalent program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The instructions, in execution order.
    pub instrs: Vec<Instr>,
}

impl Program {
    /// Returns the number of instructions in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    /// Returns `true` if the program contains no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instr in &self.instrs {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}
