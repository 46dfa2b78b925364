use std::fmt;

use crate::validate::TEXT_MAX_CHARS;

/// Result type for tasklite-types operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons user-supplied todo text is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is empty after trimming surrounding whitespace
    EmptyText,

    /// Trimmed text exceeds the length ceiling
    TooLong {
        /// Measured length of the trimmed text, in characters
        chars: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyText => write!(f, "todo text is required"),
            ValidationError::TooLong { chars } => write!(
                f,
                "todo text must be {} characters or less (got {})",
                TEXT_MAX_CHARS, chars
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
