//! One-shot probe of the transcribe-reel function.

mod config;
mod runner;

pub use config::{ProbeConfig, DEFAULT_ENDPOINT, DEFAULT_MEDIA_URL};
pub use runner::{probe_once, run_and_report, ProbeOutcome, Prober};
