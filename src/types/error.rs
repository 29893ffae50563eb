//! Error codes for extraction and file handling

use crate::types::ExtractStep;

/// Everything that can stop a simplification
#[derive(Debug, Clone, PartialEq)]
pub enum SimplifyError {
    // =========================================================================
    // E001: Extraction ended outside AWAITING_BOUND_STATE
    // =========================================================================
    /// Log ended inside a bound-state record or its detail block
    UnterminatedState { step: ExtractStep },

    // =========================================================================
    // E002: Numeric conversion
    // =========================================================================
    /// A marker line carried a token that is not a number
    InvalidNumber { line: usize, token: String },

    // =========================================================================
    // E003: Storage
    // =========================================================================
    /// Reading the log or writing the simplified artifact failed
    Io { path: String, message: String },
}

impl SimplifyError {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnterminatedState { .. } => "E001_UNTERMINATED_STATE",
            Self::InvalidNumber { .. } => "E002_INVALID_NUMBER",
            Self::Io { .. } => "E003_IO",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnterminatedState { .. } => {
                "unable to parse file correctly, exited at wrong step"
            }
            Self::InvalidNumber { .. } => "could not convert token to a number",
            Self::Io { .. } => "file access failed",
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedState { step } => {
                write!(f, "{} ({})", self.description(), step)
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "{}: {:?} on line {}", self.description(), token, line)
            }
            Self::Io { path, message } => {
                write!(f, "{} for {}: {}", self.description(), path, message)
            }
        }
    }
}

impl std::error::Error for SimplifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_message_names_step() {
        let err = SimplifyError::UnterminatedState { step: ExtractStep::CollectingDetails };
        assert_eq!(err.code(), "E001_UNTERMINATED_STATE");
        let msg = err.to_string();
        assert!(msg.starts_with("unable to parse file correctly, exited at wrong step"));
        assert!(msg.contains("COLLECTING_DETAILS"));
    }

    #[test]
    fn test_invalid_number_message() {
        let err = SimplifyError::InvalidNumber { line: 12, token: "-6x.4".to_string() };
        assert_eq!(err.code(), "E002_INVALID_NUMBER");
        assert!(err.to_string().contains("line 12"));
        assert!(err.to_string().contains("\"-6x.4\""));
    }

    #[test]
    fn test_io_from_std_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SimplifyError::io("runs/a.out", io);
        assert_eq!(err.code(), "E003_IO");
        assert!(err.to_string().contains("runs/a.out"));
    }
}
