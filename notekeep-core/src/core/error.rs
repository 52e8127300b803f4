//! Error types for the notekeep core library.

use thiserror::Error;

/// All errors that can occur within the notekeep core library.
///
/// Mutating [`NoteStore`](crate::NoteStore) operations never return these;
/// unknown ids are ignored there. Errors come from the explicit lookup
/// accessors, from configuration loading and from the embedded sample data.
#[derive(Debug, Error)]
pub enum NotekeepError {
    /// A note ID was requested that is not in the looked-up collection.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// A label ID was requested that does not exist.
    #[error("Label not found: {0}")]
    LabelNotFound(String),

    /// An embedded sample-data file is missing or unusable.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotekeepError`].
pub type Result<T> = std::result::Result<T, NotekeepError>;

impl NotekeepError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::LabelNotFound(_) => "Label no longer exists".to_string(),
            Self::Fixture(e) => format!("Sample data is damaged: {e}"),
            Self::InvalidConfig(msg) => msg.clone(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
