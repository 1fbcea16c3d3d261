use thiserror::Error;

use crate::client::ClientError;

/// Application-level error type.
///
/// The taxonomy is deliberately flat: a submission either succeeds or it
/// failed as a whole (`RequestFailed`), and an export either has a rendered
/// report to read or it does not (`ExportWithoutData`). Malformed response
/// fields never surface here — they degrade to placeholder text during
/// rendering instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network failure or a non-2xx response. The server's `{error}` message
    /// is carried verbatim when it could be parsed.
    #[error("the analysis request failed: {0}")]
    RequestFailed(String),

    #[error("no analysis results to export — run a screening or sentiment analysis first")]
    ExportWithoutData,

    /// Problems with local inputs, reported before any request is made.
    #[error("{0}")]
    Input(String),

    #[error("could not write the report: {0}")]
    Export(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::UnsupportedFile(_) | ClientError::File { .. } => {
                AppError::Input(err.to_string())
            }
            other => AppError::RequestFailed(other.to_string()),
        }
    }
}
