//! Reply shapes of the transcribe-reel function.
//!
//! The probe prints replies as opaque JSON; these types are only used to
//! summarize a reply in the logs and to feed a transcript to Readwise.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful transcription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcript text followed by a `Source: <url>` line.
    pub transcript: String,
    /// Reel description.
    pub title: String,
    /// `"<uploader> (<channel>)"`.
    pub author: String,
    pub source_url: String,
    /// Readwise API reply, present when the function uploaded the transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readwise_upload: Option<Value>,
}

/// Error reported by the function (status 400 or 500).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A reply sorted into one of the known shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionReply {
    Transcript(TranscriptResult),
    Error(ErrorBody),
    Other,
}

impl FunctionReply {
    pub fn classify(value: &Value) -> Self {
        if let Ok(result) = TranscriptResult::deserialize(value) {
            return FunctionReply::Transcript(result);
        }
        if let Ok(body) = ErrorBody::deserialize(value) {
            return FunctionReply::Error(body);
        }
        FunctionReply::Other
    }
}
