//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

/// Why a draft was refused. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A form field is empty or whitespace-only
    MissingField,
    /// Year is not an integer, or is not greater than zero
    InvalidYear,
    /// ISBN is shorter than 10 or longer than 13 characters
    InvalidIsbnLength,
    /// Cover URL does not start with "http"
    InvalidCoverUrlScheme,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "all fields required"),
            ValidationError::InvalidYear => write!(f, "year must be a positive number"),
            ValidationError::InvalidIsbnLength => write!(f, "isbn must be 10–13 characters"),
            ValidationError::InvalidCoverUrlScheme => {
                write!(f, "cover URL must start with http")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum DomainError {
    /// Draft rejected by the form rules
    Validation(ValidationError),
    /// Backend used before `init_backend`
    NotInitialized,
    /// External service error
    External(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Validation(e) => write!(f, "Validation error: {}", e),
            DomainError::NotInitialized => write!(f, "Backend not initialized"),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(e: ValidationError) -> Self {
        DomainError::Validation(e)
    }
}

// Conversion from HTTP client errors (used by the cover loader)
impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::External(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingField.to_string(), "all fields required");
        assert_eq!(
            ValidationError::InvalidYear.to_string(),
            "year must be a positive number"
        );
        assert_eq!(
            ValidationError::InvalidIsbnLength.to_string(),
            "isbn must be 10–13 characters"
        );
        assert_eq!(
            ValidationError::InvalidCoverUrlScheme.to_string(),
            "cover URL must start with http"
        );
    }

    #[test]
    fn test_domain_error_wraps_validation() {
        let err: DomainError = ValidationError::InvalidYear.into();
        assert_eq!(
            err.to_string(),
            "Validation error: year must be a positive number"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
