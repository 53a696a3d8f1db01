//! Window and graphics initialization errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// The window or its rendering context could not be created.
#[derive(Debug, Clone, Display, Error)]
#[display("Platform error: {} at {}:{}", message, file, line)]
pub struct PlatformError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlatformError {
    /// Creates a new platform error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<eframe::Error> for PlatformError {
    #[track_caller]
    fn from(err: eframe::Error) -> Self {
        Self::new(format!("eframe error: {}", err))
    }
}
