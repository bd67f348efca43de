use thiserror::Error;

/// Failure classes inside the completion pipeline.
///
/// The distinction exists for logs and tests only: at the
/// [`CompletionClient`](super::CompletionClient) boundary every variant
/// collapses into the same canned fallback answer, so callers cannot tell a
/// dead network from a model that returned malformed JSON.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion payload carried no textual choice")]
    EmptyChoices,

    #[error("malformed tutor payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
