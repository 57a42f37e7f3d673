//! Frontdesk application binary - composition root.
//!
//! Ties the workspace crates together into a single executable:
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Build the responder registry
//! 4. Drive the request batch and print the transcript

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use cli::CliArgs;
use frontdesk_core::config::FrontdeskConfig;
use frontdesk_pipeline::{ConsoleSink, PipelineController, StaticRequests};
use frontdesk_responders::default_registry;

/// The demo batch used when no requests are supplied.
const DEMO_REQUESTS: [&str; 3] = [
    "I have a document in Arabic",
    "Can you translate this to English?",
    "Where can I find my application status?",
];

/// Collect the citizen requests to run.
///
/// Priority: --query flags > --requests file (one request per line, blank
/// lines skipped) > the built-in demo batch.
fn load_requests(queries: &[String], requests_file: Option<&PathBuf>) -> std::io::Result<Vec<String>> {
    if !queries.is_empty() {
        return Ok(queries.to_vec());
    }
    if let Some(path) = requests_file {
        let content = std::fs::read_to_string(path)?;
        return Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect());
    }
    Ok(DEMO_REQUESTS.iter().map(|s| s.to_string()).collect())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first, so its log level can seed the subscriber.
    let config_file = args.resolve_config_path();
    let config = FrontdeskConfig::load_or_default(&config_file);

    // Tracing. RUST_LOG wins; then the --log-level flag; then the config.
    let default_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting Frontdesk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Responder registry.
    let registry = Arc::new(default_registry(config.intake.clone())?);
    for responder in registry.all() {
        tracing::debug!(
            name = responder.name(),
            description = responder.description(),
            "Responder ready"
        );
    }
    tracing::info!(responders = registry.len(), "Registry built");

    // Request batch.
    let requests = load_requests(&args.queries, args.requests.as_ref())?;
    tracing::info!(count = requests.len(), "Request batch loaded");

    let controller = PipelineController::new(registry, config.pipeline.clone());
    let mut source = StaticRequests::new(requests);
    let mut sink = ConsoleSink::new(std::io::stdout());
    let summary = controller.run_batch(&mut source, &mut sink).await;

    tracing::info!(
        total = summary.total,
        completed = summary.completed,
        halted = summary.halted,
        failed = summary.failed,
        "All requests processed"
    );

    Ok(())
}
