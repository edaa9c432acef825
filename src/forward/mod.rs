//! Forwards uploaded files to the external transcription service.
//!
//! One multipart POST per file; the upstream JSON body is relayed back to
//! the caller untouched.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

/// An inbound file held just long enough to forward it.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ForwardError {
    /// The transcription service answered with a non-success status.
    #[error("{status} {reason}: {body}")]
    UpstreamRejected {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("failed to reach the transcription service: {0}")]
    Transport(#[from] reqwest::Error),
    /// Success status but a body that is not JSON.
    #[error("unexpected response body from the transcription service: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct UploadForwarder {
    client: reqwest::Client,
    upload_url: String,
}

impl UploadForwarder {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
        }
    }

    /// Forward the file and return the upstream JSON body.
    pub async fn forward(&self, upload: UploadedFile) -> Result<Value, ForwardError> {
        info!(
            "Forwarding {} ({}, {} bytes) to {}",
            upload.file_name,
            upload.content_type,
            upload.data.len(),
            self.upload_url
        );

        let part = Part::bytes(upload.data)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Transcription service answered with status {}", status);

        if !status.is_success() {
            error!("Upload rejected with status {}: {}", status, body);
            return Err(ForwardError::UpstreamRejected {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                body: error_body_display(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Render an upstream error body: JSON when it parses, raw text otherwise.
fn error_body_display(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}
