use thiserror::Error;

/// Errors from transcript mutation and backend reply handling.
///
/// The formatter itself has no error type; these only arise at the driver
/// boundary.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("backend reply is not valid JSON: {0}")]
    InvalidReply(#[from] serde_json::Error),

    #[error("backend reply has neither an answer nor an error")]
    EmptyReply,
}
