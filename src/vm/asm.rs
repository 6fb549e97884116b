use crate::{
    error::AsmError,
    vm::{
        fridge::Mode,
        instr::{Instr, Operand, PrintOperand, Program, Sensor},
    },
};

/// A raw operand token scanned from an assembly line.
///
/// Whether the token was quoted matters: `PRINT "R0"` prints the text `R0`,
/// while `PRINT R0` prints the register's value.
struct AsmToken {
    text:   String,
    quoted: bool,
}

/// Parses the textual fridge assembly form into a [`Program`].
///
/// The format is line oriented: one instruction per line, `;` starts a
/// comment, blank lines are skipped, operands are separated by whitespace
/// with an optional comma, strings are double quoted, and `LABEL name`
/// lines define jump targets.
///
/// The output of a [`Program`]'s `Display` implementation parses back into
/// an equivalent program.
///
/// # Parameters
/// - `text`: The assembly source.
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// Returns an [`AsmError`] for unknown opcodes, wrong operand counts, and
/// malformed operands, each reported with its source line.
pub fn parse(text: &str) -> Result<Program, AsmError> {
    let mut instrs = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }
        instrs.push(parse_instr(&tokens, line_no)?);
    }

    Ok(Program { instrs })
}

/// Splits one assembly line into tokens.
///
/// Quoted strings are kept as single tokens with the quotes stripped;
/// commas and whitespace separate everything else. A `;` outside a string
/// ends the line.
fn tokenize(line: &str) -> Vec<AsmToken> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ';' => break,
            '"' => {
                chars.next();
                let mut text = String::new();
                for inner in chars.by_ref() {
                    if inner == '"' {
                        break;
                    }
                    text.push(inner);
                }
                tokens.push(AsmToken { text, quoted: true });
            },
            c if c.is_whitespace() || c == ',' => {
                chars.next();
            },
            _ => {
                let mut text = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || next == ',' || next == ';' || next == '"' {
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                tokens.push(AsmToken { text, quoted: false });
            },
        }
    }

    tokens
}

/// Parses one tokenized line into an instruction.
fn parse_instr(tokens: &[AsmToken], line: usize) -> Result<Instr, AsmError> {
    let opcode = tokens[0].text.as_str();

    let instr = match opcode {
        "PUSH" => Instr::Push(parse_operand(value_arg(tokens, line)?, line)?),
        "POP" => Instr::Pop(parse_operand(value_arg(tokens, line)?, line)?),
        "LOAD" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Load(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "STORE" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Store(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "ADD" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Add(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "SUB" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Sub(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "MUL" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Mul(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "DIV" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Div(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "CMP" => {
            let (a, b) = value_args(tokens, line)?;
            Instr::Cmp(parse_operand(a, line)?, parse_operand(b, line)?)
        },
        "JE" => Instr::Je(value_arg(tokens, line)?.to_string()),
        "JNE" => Instr::Jne(value_arg(tokens, line)?.to_string()),
        "JL" => Instr::Jl(value_arg(tokens, line)?.to_string()),
        "JG" => Instr::Jg(value_arg(tokens, line)?.to_string()),
        "JLE" => Instr::Jle(value_arg(tokens, line)?.to_string()),
        "JGE" => Instr::Jge(value_arg(tokens, line)?.to_string()),
        "JMP" => Instr::Jmp(value_arg(tokens, line)?.to_string()),
        "LABEL" => Instr::Label(value_arg(tokens, line)?.to_string()),
        "SET_TEMP" => Instr::SetTemp(parse_operand(value_arg(tokens, line)?, line)?),
        "SET_MODE" => {
            let name = value_arg(tokens, line)?;
            let mode = Mode::from_name(name).ok_or_else(|| AsmError::InvalidMode { mode: name.to_string(),
                                                                                   line })?;
            Instr::SetMode(mode)
        },
        "ADD_ITEM" => Instr::AddItem(value_arg(tokens, line)?.to_string()),
        "REMOVE_ITEM" => Instr::RemoveItem(value_arg(tokens, line)?.to_string()),
        "CHECK_SENSOR" => {
            let name = value_arg(tokens, line)?;
            let sensor =
                Sensor::from_asm_name(name).ok_or_else(|| AsmError::InvalidSensor { sensor: name.to_string(),
                                                                                    line })?;
            Instr::CheckSensor(sensor)
        },
        "PRINT" => {
            if tokens.len() != 2 {
                return Err(AsmError::OperandCountMismatch { opcode: opcode.to_string(),
                                                            line });
            }
            if tokens[1].quoted {
                Instr::Print(PrintOperand::Text(tokens[1].text.clone()))
            } else {
                Instr::Print(PrintOperand::Value(parse_operand(&tokens[1].text, line)?))
            }
        },
        "HALT" => {
            if tokens.len() != 1 {
                return Err(AsmError::OperandCountMismatch { opcode: opcode.to_string(),
                                                            line });
            }
            Instr::Halt
        },
        _ => {
            return Err(AsmError::UnknownOpcode { opcode: opcode.to_string(),
                                                 line });
        },
    };

    // Reject trailing operands for the fixed-arity forms.
    let expected = match &instr {
        Instr::Halt => 1,
        Instr::Load(..)
        | Instr::Store(..)
        | Instr::Add(..)
        | Instr::Sub(..)
        | Instr::Mul(..)
        | Instr::Div(..)
        | Instr::Cmp(..) => 3,
        _ => 2,
    };
    if tokens.len() != expected {
        return Err(AsmError::OperandCountMismatch { opcode: opcode.to_string(),
                                                    line });
    }

    Ok(instr)
}

/// Returns the single operand token of an instruction.
fn value_arg(tokens: &[AsmToken], line: usize) -> Result<&str, AsmError> {
    if tokens.len() < 2 {
        return Err(AsmError::OperandCountMismatch { opcode: tokens[0].text.clone(),
                                                    line });
    }
    Ok(&tokens[1].text)
}

/// Returns both operand tokens of a two-operand instruction.
fn value_args(tokens: &[AsmToken], line: usize) -> Result<(&str, &str), AsmError> {
    if tokens.len() < 3 {
        return Err(AsmError::OperandCountMismatch { opcode: tokens[0].text.clone(),
                                                    line });
    }
    Ok((&tokens[1].text, &tokens[2].text))
}

/// Parses a value operand: an integer literal, `R0`, `R1`, or `VAR_n`.
fn parse_operand(text: &str, line: usize) -> Result<Operand, AsmError> {
    match text {
        "R0" => return Ok(Operand::R0),
        "R1" => return Ok(Operand::R1),
        _ => {},
    }

    if let Some(id) = text.strip_prefix("VAR_")
       && let Ok(id) = id.parse::<u32>()
    {
        return Ok(Operand::Var(id));
    }

    if let Ok(n) = text.parse::<i64>() {
        return Ok(Operand::Imm(n));
    }

    Err(AsmError::InvalidOperand { operand: text.to_string(),
                                   line })
}
