//! JSON payload accepted by the transcribe-reel function.

use serde::{Deserialize, Serialize};

/// Body of the probe POST.
///
/// Field order is part of the wire format: `url` first, then
/// `upload_to_readwise`. The token is only serialized when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRequest {
    /// Media URL the function should transcribe.
    pub url: String,
    /// Ask the function to push the transcript to Readwise itself.
    pub upload_to_readwise: bool,
    /// Readwise token, required by the function when `upload_to_readwise` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readwise_token: Option<String>,
}

impl ProbeRequest {
    /// Create a payload for the given media URL with uploading disabled.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            upload_to_readwise: false,
            readwise_token: None,
        }
    }

    /// Set the Readwise upload flag.
    pub fn upload_to_readwise(mut self, upload: bool) -> Self {
        self.upload_to_readwise = upload;
        self
    }

    /// Attach a Readwise token.
    pub fn readwise_token(mut self, token: impl Into<String>) -> Self {
        self.readwise_token = Some(token.into());
        self
    }

    /// Serialize to the exact bytes sent on the wire.
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
