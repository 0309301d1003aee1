//! Probe configuration.

use crate::http::ProbeRequest;
use std::time::Duration;

/// Deployed transcribe-reel cloud function.
pub const DEFAULT_ENDPOINT: &str =
    "https://us-east4-davehague-site.cloudfunctions.net/transcribe-reel";

/// Reel used for the smoke test.
pub const DEFAULT_MEDIA_URL: &str = "https://www.instagram.com/reels/DDcVZQ_pyL9/";

/// Configuration for a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Function endpoint the POST is sent to.
    pub endpoint: String,
    /// Media URL placed in the payload.
    pub url: String,
    /// Value of `upload_to_readwise` in the payload.
    pub upload_to_readwise: bool,
    /// Optional Readwise token forwarded in the payload.
    pub readwise_token: Option<String>,
    /// Whole-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            url: DEFAULT_MEDIA_URL.to_string(),
            upload_to_readwise: false,
            readwise_token: None,
            timeout: None,
        }
    }
}

impl ProbeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the function endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the media URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the Readwise upload flag.
    pub fn upload_to_readwise(mut self, upload: bool) -> Self {
        self.upload_to_readwise = upload;
        self
    }

    /// Forward a Readwise token, if any.
    pub fn readwise_token(mut self, token: Option<String>) -> Self {
        self.readwise_token = token;
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the payload for this probe.
    pub fn request(&self) -> ProbeRequest {
        let request =
            ProbeRequest::new(self.url.clone()).upload_to_readwise(self.upload_to_readwise);
        match &self.readwise_token {
            Some(token) => request.readwise_token(token.clone()),
            None => request,
        }
    }
}
