//! HR API client — the single point of entry for both analysis endpoints.
//!
//! One submission maps to exactly one outbound request: no retry, no backoff,
//! no timeout beyond the runtime default. A failed request is surfaced as a
//! whole; there is no partial-result handling.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{ApiErrorBody, ScreeningResult, SentimentResult};

pub const SCREEN_RESUME_PATH: &str = "/api/screen-resume";
pub const ANALYZE_SENTIMENT_PATH: &str = "/api/analyze-sentiment";

/// File types the backend accepts for resume upload. Checked locally so a
/// doomed upload is rejected before any bytes leave the machine.
pub const ALLOWED_RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the analysis service: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the server's `{error}` body when it
    /// could be parsed, otherwise a generic description.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("could not read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("file type '{0}' is not allowed — upload a PDF, DOCX, TXT, or common image file")]
    UnsupportedFile(String),
}

/// Client for the HR analysis API. Cheap to clone; holds one reqwest client.
#[derive(Clone)]
pub struct HrClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SentimentRequest<'a> {
    feedback_type: &'a str,
    feedback: &'a str,
}

impl HrClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submits a resume file and job description as multipart form data.
    pub async fn screen_resume(
        &self,
        resume: &Path,
        job_description: &str,
    ) -> Result<ScreeningResult, ClientError> {
        let ext = resume
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ALLOWED_RESUME_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ClientError::UnsupportedFile(if ext.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{ext}")
            }));
        }

        let bytes = std::fs::read(resume).map_err(|source| ClientError::File {
            path: resume.display().to_string(),
            source,
        })?;
        let file_name = resume
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        debug!("uploading {} ({} bytes)", file_name, bytes.len());

        let form = Form::new()
            .part("resume", Part::bytes(bytes).file_name(file_name))
            .text("job_description", job_description.to_string());

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SCREEN_RESUME_PATH))
            .multipart(form)
            .send()
            .await?;

        read_json(response).await
    }

    /// Submits employee feedback as a JSON body.
    pub async fn analyze_sentiment(
        &self,
        feedback_type: &str,
        feedback: &str,
    ) -> Result<SentimentResult, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, ANALYZE_SENTIMENT_PATH))
            .json(&SentimentRequest {
                feedback_type,
                feedback,
            })
            .send()
            .await?;

        read_json(response).await
    }
}

/// Reads a success body as JSON, or turns a non-2xx response into an `Api`
/// error carrying the server's `{error}` message verbatim when parseable.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "the analysis service responded with an error".to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}
