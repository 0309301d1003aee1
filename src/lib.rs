//! # reel-probe
//!
//! Smoke test for the `transcribe-reel` cloud function. The function takes a
//! reel URL, transcribes it, and optionally pushes the transcript to Readwise.
//! This crate sends one request to it and prints what comes back.
//!
//! ```text
//!   reel-probe ──POST {"url", "upload_to_readwise"}──▶ transcribe-reel
//!        │                                                   │
//!        ◀────────────── JSON (transcript | error) ──────────┘
//!        │
//!        └── upload ──POST /highlights/──▶ Readwise API v2
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reel_probe::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let outcome = probe_once(ProbeConfig::default()).await;
//!     outcome.report(&mut std::io::stdout())
//! }
//! ```
//!
//! A failed probe is logged as `Error: ...` and never turns into a panic or
//! a distinct exit status.

pub mod error;
pub mod http;
pub mod probe;
pub mod readwise;
pub mod transcript;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::error::{ProbeError, Result};
    pub use crate::http::{ProbeRequest, ProbeResponse, StatusCode};
    pub use crate::probe::{probe_once, run_and_report, ProbeConfig, ProbeOutcome, Prober};
    pub use crate::readwise::{Highlight, ReadwiseUploader};
    pub use crate::transcript::{ErrorBody, FunctionReply, TranscriptResult};
}

pub use error::ProbeError;
pub use probe::{ProbeConfig, ProbeOutcome, Prober};
pub use readwise::ReadwiseUploader;
