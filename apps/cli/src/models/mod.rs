//! Response payloads for the two analysis endpoints.
//!
//! These are externally defined shapes consumed once per submission; nothing
//! here is persisted. Parsing is lenient by contract: every field carries a
//! default so a sparse or partially malformed payload still renders, with
//! placeholders filling the gaps.

pub mod screening;
pub mod sentiment;

use serde::Deserialize;

pub use screening::ScreeningResult;
pub use sentiment::SentimentResult;

/// Body shape of non-2xx responses from both endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
