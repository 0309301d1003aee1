//! Readwise highlight uploader.

use crate::error::{ProbeError, Result};
use crate::readwise::{Highlight, HighlightBatch};
use crate::transcript::TranscriptResult;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Readwise API v2 root.
pub const DEFAULT_BASE_URL: &str = "https://readwise.io/api/v2";

/// Authenticated client for the Readwise highlights API.
pub struct ReadwiseUploader {
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl ReadwiseUploader {
    /// Create an uploader for the public Readwise API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the uploader at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Upload a transcript as a single highlight.
    ///
    /// Only status 200 counts as success; anything else becomes
    /// [`ProbeError::Upload`] carrying the status and response text.
    pub async fn upload_transcript(&self, result: &TranscriptResult) -> Result<Value> {
        let endpoint = format!("{}/highlights/", self.base_url);
        let batch = HighlightBatch::from(Highlight::from_transcript(result));

        info!("Uploading \"{}\" to Readwise", batch.highlights[0].title);

        let response = self
            .client
            .post(&endpoint)
            .header(AUTHORIZATION, self.auth_header())
            .json(&batch)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            warn!("Readwise upload rejected with status {}", status);
            return Err(ProbeError::Upload { status, body });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Check the token against `GET /auth/`. A 204 means it is valid; any
    /// other status or a transport failure means it is not.
    pub async fn validate_token(&self) -> bool {
        let endpoint = format!("{}/auth/", self.base_url);
        match self
            .client
            .get(&endpoint)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await
        {
            Ok(response) => {
                debug!("Readwise auth check returned {}", response.status());
                response.status().as_u16() == 204
            }
            Err(e) => {
                debug!("Readwise auth check failed: {}", e);
                false
            }
        }
    }
}
