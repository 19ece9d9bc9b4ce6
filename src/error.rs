use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SweepError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("browser launch failed: {0}")]
    BrowserLaunchFailed(String),

    #[error("navigation failed for {url}: {reason}")]
    NavigationFailed { url: String, reason: String },

    #[error("screenshot capture failed: {0}")]
    CaptureFailed(String),

    #[error("browser session unavailable")]
    SessionUnavailable,

    #[error("configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl SweepError {
    /// Whether this error must abort the whole run.
    ///
    /// Per-task failures (navigation, capture, write) are logged and the
    /// sweep continues; setup failures stop the run before any work starts.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SweepError::InputNotFound(_)
                | SweepError::BrowserLaunchFailed(_)
                | SweepError::ConfigurationError(_)
                | SweepError::SerializationError(_)
        )
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        SweepError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        SweepError::SerializationError(err.to_string())
    }
}
