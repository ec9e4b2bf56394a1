use thiserror::Error;

/// Errors raised by reservoir construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter was outside its valid domain, e.g. a non-positive capacity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("capacity must be strictly positive");
        assert_eq!(
            err.to_string(),
            "invalid argument: capacity must be strictly positive"
        );
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
