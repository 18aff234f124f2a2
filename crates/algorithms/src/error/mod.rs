//! Error handling for curve arithmetic

use std::borrow::Cow;
use std::fmt;

use gostec_api::Error as CoreError;

/// The error type for curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidArgument {
                context: "curve arithmetic",
                message: format!("{}: {}", name, reason),
            },
            Error::Processing { operation, details } => CoreError::InvalidArgument {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let core_err = CoreError::from(Error::param("cofactor", "must not be zero"));
        match core_err {
            CoreError::InvalidArgument { message, .. } => {
                assert_eq!(message, "cofactor: must not be zero");
            }
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }

        let core_err = CoreError::from(Error::Processing {
            operation: "mod_inverse",
            details: "zero has no inverse",
        });
        assert_eq!(
            core_err,
            CoreError::InvalidArgument {
                context: "mod_inverse",
                message: "zero has no inverse".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        let err = Error::Processing {
            operation: "mod_inverse",
            details: "zero has no inverse",
        };
        assert_eq!(
            err.to_string(),
            "Processing error in mod_inverse: zero has no inverse"
        );
    }
}
