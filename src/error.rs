use std::{error, fmt};

/// Failures reported by [`List`](crate::List) and [`Node`](crate::Node) operations.
///
/// A failed operation never leaves the list half-modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Memory for a node or list could not be obtained.
    Allocation,
    /// The node handed to `append` is not a lone cell.
    InvalidArgument,
    /// Removal index is negative, past the end, or the list is empty.
    IndexOutOfRange { index: i64, len: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Allocation => write!(f, "allocation failed"),
            ListError::InvalidArgument => write!(f, "node is already linked into a chain"),
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of size {}", index, len)
            }
        }
    }
}

impl error::Error for ListError {}

/// Reasons a command line is discarded before it reaches the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    /// Operand token holds something other than decimal digits, or overflows.
    BadOperand(String),
    /// `a` and `r` need a number.
    MissingOperand(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command line"),
            ParseError::BadOperand(tok) => write!(f, "invalid operand `{}`", tok),
            ParseError::MissingOperand(action) => {
                write!(f, "action `{}` requires an operand", action)
            }
        }
    }
}

impl error::Error for ParseError {}
