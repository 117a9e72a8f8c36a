//! Parse error type for the expression front-end

use std::fmt;

/// Syntax error while parsing a boolean expression.
///
/// Positions are character offsets into the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseExprError {
    /// A character that fits no production at this point.
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Character offset in the input.
        pos: usize,
    },
    /// Input ended inside an atom or group.
    UnexpectedEnd,
    /// A `(` group was never closed.
    MissingCloseParen {
        /// Character offset where `)` was expected.
        pos: usize,
    },
    /// Complete expression parsed but input continues.
    TrailingInput {
        /// Character offset of the first leftover character.
        pos: usize,
    },
}

impl fmt::Display for ParseExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseExprError::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character {:?} at position {}", ch, pos)
            }
            ParseExprError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            ParseExprError::MissingCloseParen { pos } => {
                write!(f, "missing ')' at position {}", pos)
            }
            ParseExprError::TrailingInput { pos } => {
                write!(f, "trailing input at position {}", pos)
            }
        }
    }
}

impl std::error::Error for ParseExprError {}
