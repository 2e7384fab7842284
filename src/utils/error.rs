use std::error::Error;
use std::fmt;

/// Main error type for the numkit library.
#[derive(Debug)]
pub enum NumkitError {
    /// An invalid argument was provided
    InvalidArg(String),
    /// A value fell outside the range an encoder accepts
    OutOfRange(String),
    /// Text could not be parsed back into a value
    Parse(String),
    /// A custom error with a message
    Custom(String),
}

impl fmt::Display for NumkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumkitError::InvalidArg(msg) => write!(f, "Invalid argument: {}", msg),
            NumkitError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            NumkitError::Parse(msg) => write!(f, "Parse error: {}", msg),
            NumkitError::Custom(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for NumkitError {}

impl From<crate::encode::bits::BitsError> for NumkitError {
    fn from(err: crate::encode::bits::BitsError) -> Self {
        NumkitError::InvalidArg(err.to_string())
    }
}

impl From<crate::analysis::coverage::CoverageError> for NumkitError {
    fn from(err: crate::analysis::coverage::CoverageError) -> Self {
        NumkitError::InvalidArg(err.to_string())
    }
}

impl From<crate::encode::roman::RomanError> for NumkitError {
    fn from(err: crate::encode::roman::RomanError) -> Self {
        use crate::encode::roman::RomanError;

        match err {
            RomanError::OutOfRange(_) => NumkitError::OutOfRange(err.to_string()),
            RomanError::Empty | RomanError::UnknownSymbol { .. } | RomanError::NonCanonical(_) => {
                NumkitError::Parse(err.to_string())
            }
        }
    }
}

/// A specialized `Result` type for numkit operations.
pub type Result<T> = std::result::Result<T, NumkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::bits::BitsError;
    use crate::encode::roman::RomanError;

    #[test]
    fn test_display() {
        assert_eq!(
            NumkitError::InvalidArg("test".to_string()).to_string(),
            "Invalid argument: test"
        );

        assert_eq!(
            NumkitError::OutOfRange("test".to_string()).to_string(),
            "Out of range: test"
        );

        assert_eq!(
            NumkitError::Parse("test".to_string()).to_string(),
            "Parse error: test"
        );

        assert_eq!(
            NumkitError::Custom("test".to_string()).to_string(),
            "Error: test"
        );
    }

    #[test]
    fn test_component_conversions() {
        let err: NumkitError = BitsError::Negative(-3).into();
        assert!(matches!(err, NumkitError::InvalidArg(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: Negative value has no minimal binary form: -3"
        );

        let err: NumkitError = RomanError::OutOfRange(4000).into();
        assert!(matches!(err, NumkitError::OutOfRange(_)));

        let err: NumkitError = RomanError::NonCanonical("IIII".to_string()).into();
        assert!(matches!(err, NumkitError::Parse(_)));
    }
}
