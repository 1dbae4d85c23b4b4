// src/error.rs

//! Error types for the owlqn crate.

use std::fmt;

/// Errors that can occur when setting up an OWLQN run.
///
/// Failing to converge is deliberately *not* an error: hitting the iteration
/// cap or exhausting the line search are normal terminal states reported
/// through [`crate::Termination`] on the result.
#[derive(Debug, Clone)]
pub enum OwlqnError {
    /// Input dimensions are invalid.
    InvalidDimensions {
        /// Description of the dimension error.
        message: String,
    },

    /// Invalid configuration or call parameter.
    InvalidConfig {
        /// Name of the invalid parameter.
        parameter: String,
        /// Description of why it's invalid.
        message: String,
    },
}

impl fmt::Display for OwlqnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwlqnError::InvalidDimensions { message } => {
                write!(f, "Invalid dimensions: {}", message)
            }
            OwlqnError::InvalidConfig { parameter, message } => {
                write!(f, "Invalid configuration for '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for OwlqnError {}

/// Convenience type alias for Results with OwlqnError.
pub type Result<T> = std::result::Result<T, OwlqnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = OwlqnError::InvalidDimensions {
            message: "x0 cannot be empty".into(),
        };
        assert!(err.to_string().contains("x0 cannot be empty"));

        let err = OwlqnError::InvalidConfig {
            parameter: "tol".into(),
            message: "must be positive".into(),
        };
        assert!(err.to_string().contains("'tol'"));
    }
}
