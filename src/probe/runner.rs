//! Sends the probe and reports what came back.

use crate::error::{ProbeError, Result};
use crate::http::ProbeResponse;
use crate::probe::ProbeConfig;
use crate::transcript::FunctionReply;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, error, info, warn};

/// Issues the single POST against the transcribe function.
pub struct Prober {
    config: ProbeConfig,
    client: reqwest::Client,
}

impl Prober {
    /// Create a prober, validating the endpoint and building the HTTP client.
    pub fn new(config: ProbeConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| ProbeError::config(format!("endpoint {:?}: {}", config.endpoint, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Send the request and capture the response, whatever its status.
    pub async fn run(&self) -> Result<ProbeResponse> {
        let body = self.config.request().to_body()?;

        info!("POST {} (url={})", self.config.endpoint, self.config.url);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let response = ProbeResponse::from_reqwest(response).await?;
        debug!(
            "Received {} ({} bytes)",
            response.status,
            response.body.len()
        );
        Ok(response)
    }

    /// Run the probe and parse the reply as JSON. Never fails; errors are
    /// carried in the outcome.
    pub async fn probe(&self) -> ProbeOutcome {
        let response = match self.run().await {
            Ok(response) => response,
            Err(e) => return ProbeOutcome::Failure(e),
        };

        if !response.status.is_success() {
            warn!("Function responded with status {}", response.status);
        }

        match response.json::<Value>() {
            Ok(value) => ProbeOutcome::Success(value),
            Err(e) => {
                let content_type = response
                    .get_header("content-type")
                    .map(String::as_str)
                    .unwrap_or("<none>");
                debug!(
                    "Unparseable body (content-type {}): {}",
                    content_type,
                    response.text()
                );
                ProbeOutcome::Failure(e.into())
            }
        }
    }
}

/// Build a prober from `config` and run it once. Setup errors become a
/// failed outcome like any other.
pub async fn probe_once(config: ProbeConfig) -> ProbeOutcome {
    match Prober::new(config) {
        Ok(prober) => prober.probe().await,
        Err(e) => ProbeOutcome::Failure(e),
    }
}

/// Run once and report to `out`. Nothing here fails: request, decode and
/// write errors all end up as an `Error:` log line.
pub async fn run_and_report<W: Write>(config: ProbeConfig, out: &mut W) -> ProbeOutcome {
    let outcome = probe_once(config).await;
    if let Err(e) = outcome.report(out) {
        error!("Error: {}", e);
    }
    outcome
}

/// Result of one probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The function answered with a JSON document.
    Success(Value),
    /// The request failed or the reply was not JSON.
    Failure(ProbeError),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    /// Print the JSON reply to `out`, or log the failure with an `Error:` prefix.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            ProbeOutcome::Success(value) => {
                match FunctionReply::classify(value) {
                    FunctionReply::Transcript(result) => {
                        info!("Transcribed \"{}\" by {}", result.title, result.author)
                    }
                    FunctionReply::Error(body) => warn!("Function reported: {}", body.error),
                    FunctionReply::Other => debug!("Reply has no known shape"),
                }
                let rendered = serde_json::to_string_pretty(value)?;
                writeln!(out, "{}", rendered)?;
                out.flush()
            }
            ProbeOutcome::Failure(err) => {
                error!("Error: {}", err);
                Ok(())
            }
        }
    }
}
