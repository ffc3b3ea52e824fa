//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for consolekit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KitError {
    /// A raw argument token could not be inspected
    #[error("Invalid argument #{}: {reason}", .index + 1)]
    InvalidArgument { index: usize, reason: String },

    /// One or more required options were not supplied
    #[error("Missing these required options: {}", .names.join(", "))]
    MissingRequiredOptions { names: Vec<String> },

    /// An option value could not be converted to the requested type
    #[error("Invalid value '{value}' for option '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// A log sink could not be written
    #[error("Log error: {message}")]
    Log { message: String },
}

impl KitError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::InvalidArgument { .. } => 1,
            Self::MissingRequiredOptions { .. } => 2,
            Self::InvalidValue { .. } => 3,
            Self::Log { .. } => 4,
        }
    }

    /// Create an invalid argument error for the token at `index`
    #[inline]
    pub fn invalid_argument<S: Into<String>>(index: usize, reason: S) -> Self {
        Self::InvalidArgument {
            index,
            reason: reason.into(),
        }
    }

    /// Create a missing required options error
    #[inline]
    pub fn missing_required<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingRequiredOptions {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid value error
    #[inline]
    pub fn invalid_value<N, V, R>(name: N, value: V, reason: R) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a log sink error
    #[inline]
    pub fn log<S: Into<String>>(message: S) -> Self {
        Self::Log {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message_joins_names() {
        let err = KitError::missing_required(["RequiredParam1", "RequiredParam2"]);
        assert_eq!(
            err.to_string(),
            "Missing these required options: RequiredParam1, RequiredParam2"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_argument_is_one_based_in_message() {
        let err = KitError::invalid_argument(0, "argument is empty");
        assert_eq!(err.to_string(), "Invalid argument #1: argument is empty");
        assert_eq!(err.exit_code(), 1);
    }
}
