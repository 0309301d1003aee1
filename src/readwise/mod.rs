//! Readwise API v2 client used to publish transcripts as highlights.

mod highlight;
mod uploader;

pub use highlight::{Highlight, HighlightBatch};
pub use uploader::{ReadwiseUploader, DEFAULT_BASE_URL};
