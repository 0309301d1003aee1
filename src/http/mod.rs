//! Wire types for the transcribe-reel function: the JSON payload we send and
//! the response we capture.

mod request;
mod response;

pub use request::ProbeRequest;
pub use response::{ProbeResponse, StatusCode};
