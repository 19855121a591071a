//! Error types for Birthday Greeting

use thiserror::Error;

/// Main error type for Birthday Greeting startup operations
///
/// Nothing after startup can fail in a way that affects the page flow, so
/// every variant here concerns loading and validating the greeting.
#[derive(Error, Debug)]
pub enum GreetingError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or does not match the schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Target instant could not be parsed
    #[error("Invalid target instant: {0}")]
    InvalidTarget(String),

    /// Config parsed but holds values the greeting cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using GreetingError
pub type GreetingResult<T> = Result<T, GreetingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GreetingError::InvalidTarget("tomorrow-ish".to_string());
        assert_eq!(format!("{}", err), "Invalid target instant: tomorrow-ish");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GreetingError = io_err.into();
        assert!(matches!(err, GreetingError::Io(_)));
    }
}
