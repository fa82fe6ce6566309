use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracklineError {
    #[error("invalid visibility filter: {0}")]
    InvalidFilter(String),

    #[error("invalid notification channel: {0}")]
    InvalidChannel(String),

    #[error("notification draft is not sendable: {0}")]
    UnsendableDraft(String),

    /// A host callback (comment, edit, reply, notification send) failed.
    /// Surfaced to the user as a transient notice; there is no optimistic
    /// update to roll back.
    #[error("submission failed: {0}")]
    Submission(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TracklineError>;
