//! Input checks shared by the services

use crate::error::DomainError;

/// Require a present, non-blank value. The value is returned as given,
/// surrounding whitespace included.
pub fn require_text(value: Option<&str>, message: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(DomainError::InvalidArgument(message.to_string())),
    }
}

pub const COURSE_NAME_REQUIRED: &str = "Course name cannot be null or empty";
pub const SUBJECT_TITLE_REQUIRED: &str = "Subject title cannot be null or empty";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_is_rejected() {
        let err = require_text(None, COURSE_NAME_REQUIRED).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(msg) if msg == COURSE_NAME_REQUIRED));
    }

    #[test]
    fn whitespace_only_value_is_rejected() {
        assert!(require_text(Some(" \t\n"), SUBJECT_TITLE_REQUIRED).is_err());
        assert!(require_text(Some(""), SUBJECT_TITLE_REQUIRED).is_err());
    }

    #[test]
    fn value_is_kept_untrimmed() {
        assert_eq!(
            require_text(Some(" RTOS "), SUBJECT_TITLE_REQUIRED).unwrap(),
            " RTOS "
        );
    }
}
