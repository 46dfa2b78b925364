use crate::error::{Result, ValidationError};

/// Maximum accepted todo text length, in characters
pub const TEXT_MAX_CHARS: usize = 500;

/// Validate and normalize user-supplied todo text.
///
/// Trims surrounding whitespace, then rejects text that is empty or longer
/// than [`TEXT_MAX_CHARS`]. On success returns the trimmed text, which is
/// the only form that may enter the item list. Both the create and the edit
/// path call through here; there is no bypass.
pub fn validate_text(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let chars = trimmed.chars().count();
    if chars > TEXT_MAX_CHARS {
        return Err(ValidationError::TooLong { chars });
    }

    Ok(trimmed.to_string())
}
