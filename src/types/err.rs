//! Error types used in the library.
//!
//! - Parse and clause errors are the only errors expected during ordinary use, and are raised before any search begins.
//! - Input and output errors are raised by the line-oriented [io](crate::io) boundary.
//! - A query which is not entailed is *not* an error, see [Report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Clause(ClauseError),
    Input(InputError),

    /// Writing a trace failed.
    Output(std::io::ErrorKind),
}

/// Errors when parsing a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some formula was required.
    Empty,

    /// A character which does not begin any token.
    Character(char),

    /// A run of uppercase letters which is neither a symbol nor an operator.
    Word(String),

    /// A `(` without a matching `)`.
    UnmatchedOpen,

    /// A `)` without a matching `(`.
    UnmatchedClose,

    /// An operator was reduced without enough operands.
    MissingOperand,

    /// A negation was read where an operand had just been completed, e.g. `A -B`.
    Negation,

    /// More than one formula remained after reduction, e.g. `A B`.
    ExcessOperand,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when reading a literal or a clause given in clause form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// A symbol outside of A--Z.
    Symbol(char),

    /// Some text which is not a literal, e.g. `AB` or `--A`.
    Literal(String),

    /// Nothing between two disjunctions, or an empty line.
    Empty,
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors from a line-oriented input source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    /// The source could not be read at the given line.
    Read(usize),

    /// The line which should contain the count of clauses does not.
    Count(usize),

    /// The source ended before the given line.
    MissingLine(usize),

    /// The query did not parse.
    Query(ParseError),

    /// A clause did not parse at the given line.
    Clause(usize, ClauseError),
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::Character(c) => write!(f, "unexpected character '{c}'"),
            Self::Word(w) => write!(f, "unknown word '{w}'"),
            Self::UnmatchedOpen => write!(f, "unmatched '('"),
            Self::UnmatchedClose => write!(f, "unmatched ')'"),
            Self::MissingOperand => write!(f, "operator is missing an operand"),
            Self::Negation => write!(f, "negation follows an operand"),
            Self::ExcessOperand => write!(f, "operand without an operator"),
        }
    }
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(c) => write!(f, "'{c}' is not a symbol, a symbol must be one of A-Z"),
            Self::Literal(s) => write!(f, "'{s}' is not a literal"),
            Self::Empty => write!(f, "missing literal"),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(line) => write!(f, "failed to read line {line}"),
            Self::Count(line) => write!(f, "expected a count of clauses at line {line}"),
            Self::MissingLine(line) => write!(f, "input ended before line {line}"),
            Self::Query(e) => write!(f, "query: {e}"),
            Self::Clause(line, e) => write!(f, "clause at line {line}: {e}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Clause(e) => write!(f, "Clause error: {e}"),
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
