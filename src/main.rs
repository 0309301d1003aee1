//! reel-probe CLI.
//!
//! With no arguments, POSTs the stock payload to the transcribe-reel function
//! and prints the JSON reply.

use clap::{Args, Parser, Subcommand};
use reel_probe::prelude::*;
use reel_probe::probe::{DEFAULT_ENDPOINT, DEFAULT_MEDIA_URL};
use reel_probe::readwise::DEFAULT_BASE_URL;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    probe: ProbeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one request to the transcribe function and print the reply (default).
    Probe(ProbeArgs),
    /// Check a Readwise token against the auth endpoint.
    CheckToken(ReadwiseArgs),
    /// Upload a transcript JSON document (e.g. piped probe output) to Readwise.
    Upload {
        /// File holding the transcript; `-` or nothing reads stdin.
        input: Option<PathBuf>,

        #[command(flatten)]
        readwise: ReadwiseArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct ProbeArgs {
    /// Function endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Reel URL to transcribe.
    #[arg(long, default_value = DEFAULT_MEDIA_URL)]
    url: String,

    /// Ask the function to upload the transcript to Readwise.
    #[arg(long)]
    upload_to_readwise: bool,

    /// Readwise token forwarded to the function. Never read from the
    /// environment so the default payload stays fixed.
    #[arg(long)]
    readwise_token: Option<String>,

    /// Give up after this many seconds. Waits indefinitely when unset.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl From<ProbeArgs> for ProbeConfig {
    fn from(args: ProbeArgs) -> Self {
        ProbeConfig::new()
            .endpoint(args.endpoint)
            .url(args.url)
            .upload_to_readwise(args.upload_to_readwise)
            .readwise_token(args.readwise_token)
            .timeout(args.timeout_secs.map(Duration::from_secs))
    }
}

#[derive(Args, Debug, Clone)]
struct ReadwiseArgs {
    /// Readwise access token.
    #[arg(long, env = "READWISE_TOKEN", hide_env_values = true)]
    readwise_token: Option<String>,

    /// Readwise API root.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    readwise_url: String,
}

impl ReadwiseArgs {
    fn uploader(&self) -> Result<ReadwiseUploader> {
        let token = self
            .readwise_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ProbeError::MissingToken)?;
        Ok(ReadwiseUploader::new(token).with_base_url(self.readwise_url.clone()))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr; stdout carries only JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Probe(cli.probe)) {
        Command::Probe(args) => {
            // Failures are logged inside; the exit status is always success.
            run_and_report(args.into(), &mut std::io::stdout()).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckToken(args) => {
            let uploader = match args.uploader() {
                Ok(uploader) => uploader,
                Err(e) => {
                    tracing::error!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            if uploader.validate_token().await {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Upload { input, readwise } => match upload(input, &readwise).await {
            Ok(response) => {
                println!("{}", serde_json::to_string_pretty(&response)?);
                tracing::info!("Successfully uploaded to Readwise");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

async fn upload(input: Option<PathBuf>, args: &ReadwiseArgs) -> Result<serde_json::Value> {
    let uploader = args.uploader()?;

    let raw = match input {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(&path).await?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let transcript: TranscriptResult = serde_json::from_str(&raw)?;
    uploader.upload_transcript(&transcript).await
}
