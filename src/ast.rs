use crate::vm::instr::Sensor;

/// Represents a literal value in the language.
///
/// `Literal` covers the raw, constant values that can appear directly in
/// source code. Exactly one alternative is active per instance: a number, a
/// piece of text, or a boolean flag. Numbers and booleans may appear inside
/// expressions; text appears only as a command operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Number(i64),
    /// A string literal, such as `"milk"`.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl Literal {
    /// Returns the numeric form of the literal, if it has one.
    ///
    /// Booleans are numeric at runtime: `true` is 1 and `false` is 0.
    /// String literals have no numeric form.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(*b as i64),
            Self::Str(_) => None,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions always evaluate to a number at runtime; comparisons produce
/// 0 or 1. Each variant carries its source line for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or boolean).
    Literal {
        /// The constant value.
        value: Literal,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A read of one of the fridge's read-only sensors.
    Sensor {
        /// Which sensor is being read.
        sensor: Sensor,
        /// Line number in the source code.
        line:   usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Sensor { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a program is made of. Control statements carry
/// nested statement lists for their bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment binding an already declared name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional with an optional else branch.
    If {
        /// The condition expression; non-zero means true.
        condition:   Expr,
        /// Statements executed when the condition holds.
        then_branch: Vec<Self>,
        /// Statements executed otherwise, if present.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A while loop.
    While {
        /// The loop condition; non-zero means true.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Sets the fridge's target temperature.
    SetTemp {
        /// The new temperature in degrees Celsius.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Switches the fridge's operating mode.
    SetMode {
        /// The mode name as written in the source (`"ECO"` etc.).
        mode: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Adds an item to the fridge.
    AddItem {
        /// The item name.
        item: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Removes an item from the fridge.
    RemoveItem {
        /// The item name.
        item: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Prints a message or the value of an expression.
    Print {
        /// What to print.
        arg:  PrintArg,
        /// Line number in the source code.
        line: usize,
    },
}

/// The operand of a `print` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintArg {
    /// A string literal printed verbatim.
    Text(String),
    /// An expression whose numeric value is printed.
    Value(Expr),
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` if the operator is a comparison rather than an
    /// arithmetic operation.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
