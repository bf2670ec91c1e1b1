//! Error types module
//!
//! All failures surfaced to the HTTP layer are unified under [`AppError`].
//! Each variant knows its HTTP status code and the level it should be
//! logged at, so handlers never hand-pick status codes.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures
    Debug,
    /// Recoverable issues
    Warn,
    /// Unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Storage(_) | AppError::Internal(_) => 500,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "Storage",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::InvalidInput("bad".into()).http_status_code(), 400);
        assert_eq!(AppError::NotFound("missing".into()).http_status_code(), 404);
        assert_eq!(AppError::PayloadTooLarge("big".into()).http_status_code(), 413);
        assert_eq!(AppError::Storage("down".into()).http_status_code(), 500);
        assert_eq!(AppError::Internal("oops".into()).http_status_code(), 500);
    }

    #[test]
    fn client_errors_log_at_debug() {
        assert_eq!(AppError::InvalidInput("bad".into()).log_level(), LogLevel::Debug);
        assert_eq!(AppError::Storage("down".into()).log_level(), LogLevel::Error);
    }

    #[test]
    fn validation_messages_pass_through_unchanged() {
        // The HTTP contract depends on exact messages like "No song selected".
        let err = AppError::InvalidInput("No song selected".into());
        assert_eq!(err.to_string(), "No song selected");
    }
}
