//! Input validation for envault operations.
//!
//! Validates variable names and values before they reach the env file or the
//! process environment.

use crate::error::{Result, ValidationError};

/// Validate a variable name.
///
/// Names must be valid environment variable names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    // Check first character - must not be a digit
    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    // Check all characters - must be A-Z, a-z, 0-9, or underscore
    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a variable value.
///
/// Values may be empty and may contain newlines (the codec escapes them), but
/// a NUL byte can never reach the process environment.
///
/// # Errors
///
/// Returns `ValidationError` if the value contains a NUL byte.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(ValidationError::NulByte {
            name: name.to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("DATABASE_URL").is_ok());
        assert!(validate_name("API_KEY").is_ok());
        assert!(validate_name("SECRET_123").is_ok());
        assert!(validate_name("_PRIVATE").is_ok());
        assert!(validate_name("lower_case").is_ok());
        assert!(validate_name("A").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        // Empty name
        assert!(validate_name("").is_err());

        // Starting with digit
        assert!(validate_name("123_KEY").is_err());

        // Invalid characters
        assert!(validate_name("API-KEY").is_err());
        assert!(validate_name("API.KEY").is_err());
        assert!(validate_name("API KEY").is_err());
        assert!(validate_name("API=KEY").is_err());
        assert!(validate_name("API@KEY").is_err());
    }

    #[test]
    fn test_valid_values() {
        assert!(validate_value("KEY", "value").is_ok());
        assert!(validate_value("KEY", "with spaces").is_ok());
        assert!(validate_value("KEY", "").is_ok());
        assert!(validate_value("KEY", "line1\nline2").is_ok());
        assert!(validate_value("KEY", "a=b=c").is_ok());
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert!(validate_value("KEY", "nul\0inside").is_err());
    }
}
