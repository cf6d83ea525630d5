//! Error types shared across monreg crates.

use std::path::PathBuf;

/// Top-level error type for monreg operations.
#[derive(Debug, thiserror::Error)]
pub enum MonregError {
    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error("Monitor index {index} out of range ({count} monitors)")]
    MonitorIndexOutOfRange { index: usize, count: usize },

    #[error("Monitor {index} has no matching adapter output")]
    AdapterOutputUnresolved { index: usize },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Context chain from Win32 calls, rendered in full.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using MonregError.
pub type MonregResult<T> = Result<T, MonregError>;

impl MonregError {
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }

    /// Whether this error is a lookup miss rather than a platform failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MonitorIndexOutOfRange { .. } | Self::AdapterOutputUnresolved { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_are_not_found() {
        assert!(MonregError::MonitorIndexOutOfRange { index: 3, count: 2 }.is_not_found());
        assert!(MonregError::AdapterOutputUnresolved { index: 0 }.is_not_found());
        assert!(!MonregError::platform("dxgi unavailable").is_not_found());
    }

    #[test]
    fn out_of_range_message_names_index_and_count() {
        let err = MonregError::MonitorIndexOutOfRange { index: 5, count: 2 };
        assert_eq!(err.to_string(), "Monitor index 5 out of range (2 monitors)");
    }

    fn create_factory() -> MonregResult<()> {
        use anyhow::Context;

        let hresult: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "0x887A0004",
        ));
        hresult.context("CreateDXGIFactory1 failed")?;
        Ok(())
    }

    #[test]
    fn anyhow_context_converts_with_full_chain() {
        let err = create_factory().unwrap_err();
        assert!(matches!(err, MonregError::Other(_)));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "CreateDXGIFactory1 failed: 0x887A0004");
    }
}
