//! Highlight records sent to Readwise.

use crate::transcript::TranscriptResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Readwise field limits, in characters.
pub const MAX_TEXT_CHARS: usize = 8191;
pub const MAX_TITLE_CHARS: usize = 511;
pub const MAX_AUTHOR_CHARS: usize = 1024;

const CATEGORY: &str = "podcasts";
const SOURCE_TYPE: &str = "instagram_reel";

/// One highlight in a `POST /highlights/` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub title: String,
    pub author: String,
    pub source_url: String,
    pub category: String,
    pub source_type: String,
    /// RFC 3339 timestamp.
    pub highlighted_at: String,
}

impl Highlight {
    /// Build a highlight from a transcript, stamped with the current time.
    pub fn from_transcript(result: &TranscriptResult) -> Self {
        Self::from_transcript_at(result, Utc::now())
    }

    /// Build a highlight from a transcript with an explicit timestamp.
    pub fn from_transcript_at(result: &TranscriptResult, at: DateTime<Utc>) -> Self {
        Self {
            text: truncate_chars(&result.transcript, MAX_TEXT_CHARS),
            title: truncate_chars(&result.title, MAX_TITLE_CHARS),
            author: truncate_chars(&result.author, MAX_AUTHOR_CHARS),
            source_url: result.source_url.clone(),
            category: CATEGORY.to_string(),
            source_type: SOURCE_TYPE.to_string(),
            highlighted_at: isoformat(at),
        }
    }
}

/// Request body: `{"highlights": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightBatch {
    pub highlights: Vec<Highlight>,
}

impl From<Highlight> for HighlightBatch {
    fn from(highlight: Highlight) -> Self {
        Self {
            highlights: vec![highlight],
        }
    }
}

/// RFC 3339 with microseconds, dropping the fraction when it is zero.
fn isoformat(at: DateTime<Utc>) -> String {
    let format = if at.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(format, false)
}

/// Keep at most `max` characters, never splitting one.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
