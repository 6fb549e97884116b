use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens, such as `"milk"`. Quotes are stripped.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `var`
    #[token("var")]
    Var,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `set_temp`
    #[token("set_temp")]
    SetTemp,
    /// `set_mode`
    #[token("set_mode")]
    SetMode,
    /// `add_item`
    #[token("add_item")]
    AddItem,
    /// `remove_item`
    #[token("remove_item")]
    RemoveItem,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `door`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Statement separators.
    #[token("\n", |lex| lex.extras.line += 1)]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the numeric code of the token.
    ///
    /// The numbering is the stable contract a lexer and parser must agree
    /// on: named tokens are numbered 258 through 274 in declaration order
    /// (`Identifier` = 258 … `GreaterEqual` = 274), while single-character
    /// tokens report their ASCII value. Tokens the parser never sees
    /// (skipped comments and whitespace) report 0.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Identifier(_) => 258,
            Self::Number(_) => 259,
            Self::Str(_) => 260,
            Self::Bool(_) => 261,
            Self::Var => 262,
            Self::If => 263,
            Self::Else => 264,
            Self::While => 265,
            Self::SetTemp => 266,
            Self::SetMode => 267,
            Self::AddItem => 268,
            Self::RemoveItem => 269,
            Self::Print => 270,
            Self::EqualEqual => 271,
            Self::BangEqual => 272,
            Self::LessEqual => 273,
            Self::GreaterEqual => 274,
            Self::Less => b'<' as u16,
            Self::Greater => b'>' as u16,
            Self::Equals => b'=' as u16,
            Self::Plus => b'+' as u16,
            Self::Minus => b'-' as u16,
            Self::Star => b'*' as u16,
            Self::Slash => b'/' as u16,
            Self::LParen => b'(' as u16,
            Self::RParen => b')' as u16,
            Self::LBrace => b'{' as u16,
            Self::RBrace => b'}' as u16,
            Self::NewLine => b'\n' as u16,
            Self::Comment | Self::Ignored => 0,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a string literal from the current token slice, stripping the
/// surrounding quotes.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
