//! Error types for the analytics dispatcher.

/// Errors that can occur when dispatching analytics calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument had the wrong type or shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Event name collides with a name reserved by the analytics platform.
    #[error("Event name '{0}' is reserved and cannot be used")]
    ReservedName(String),

    /// Event name contains characters other than alphanumerics and underscores.
    #[error("Event name '{0}' is invalid. Names should contain 1 to 32 alphanumeric characters or underscores")]
    InvalidFormat(String),

    /// Too many event parameters.
    #[error("Maximum number of parameters exceeded: {actual} given, at most {max} allowed")]
    LimitExceeded { max: usize, actual: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed bridge invocation.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_message() {
        let err = Error::LimitExceeded { max: 25, actual: 26 };
        assert_eq!(
            err.to_string(),
            "Maximum number of parameters exceeded: 26 given, at most 25 allowed"
        );
    }
}
