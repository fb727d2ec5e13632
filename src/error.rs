use thiserror::Error;

/// Failures surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid URL: missing or empty 'url' field")]
    MissingUrl,

    #[error("Invalid URL: could not extract video ID from: {0}")]
    InvalidUrl(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("No transcript found for this video: {message}")]
    NoTranscript { video_id: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Video ID the failure relates to, when one was extracted
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Error::NoTranscript { video_id, .. } => Some(video_id),
            _ => None,
        }
    }
}
