//! Boundary validation for incoming text.

use thiserror::Error;

/// Input rejected before analysis runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No text provided for analysis")]
    MissingText,

    #[error("Text to analyze is empty")]
    EmptyText,
}

/// Accept `text` only when it is present and not blank.
///
/// Every transport calls this before handing text to the analyzer.
pub fn validate_text(text: Option<&str>) -> Result<&str, InputError> {
    match text {
        None => Err(InputError::MissingText),
        Some(t) if t.trim().is_empty() => Err(InputError::EmptyText),
        Some(t) => Ok(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text(None), Err(InputError::MissingText));
        assert_eq!(validate_text(Some("")), Err(InputError::EmptyText));
        assert_eq!(validate_text(Some(" \n ")), Err(InputError::EmptyText));
        assert_eq!(validate_text(Some("hello")), Ok("hello"));
    }
}
