use std::fmt;

/// Error types for string-to-integer parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseUintError {
    Empty,
    InvalidDigit(char),
    UnsupportedRadix(u32),
}

impl fmt::Display for ParseUintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseUintError::Empty => write!(f, "Cannot parse integer from empty string"),
            ParseUintError::InvalidDigit(c) => write!(f, "Invalid digit in input: {}", c),
            ParseUintError::UnsupportedRadix(radix) => {
                write!(f, "Unsupported radix: {}", radix)
            }
        }
    }
}

impl std::error::Error for ParseUintError {}
