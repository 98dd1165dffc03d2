//! Error types for the cliui crate

use thiserror::Error;

/// Errors that can occur while printing or prompting
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (reading input, writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown color or title mode
    #[error("invalid mode '{0}' (expected auto, always or never)")]
    InvalidMode(String),

    /// Invalid search pattern for recorded messages
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Whether the user interrupted a blocking read
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::Interrupted)
    }
}

/// Result type for cliui operations
pub type Result<T> = std::result::Result<T, Error>;
