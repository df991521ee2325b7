use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;
use streamgate_domain::{MessageFieldTransformer, RecordPipelineService};
use streamgate_firehose::FirehoseSinkProvider;
use streamgate_handler::{ServiceConfig, TransformationEvent, handle_event, telemetry};
use tracing::info;

/// Local driver: one transformation event as JSON on stdin, the response
/// as JSON on stdout. Invocation plumbing proper lives outside this repo.
#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env().context("Failed to load configuration")?;
    telemetry::init_telemetry(&config.log_level);

    info!(
        max_reingest_attempts = config.max_reingest_attempts,
        "starting streamgate"
    );

    let service = RecordPipelineService::new(
        Arc::new(MessageFieldTransformer),
        Arc::new(FirehoseSinkProvider::new()),
        config.max_reingest_attempts,
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read event from stdin")?;

    let event: TransformationEvent =
        serde_json::from_str(&input).context("Failed to parse transformation event")?;

    let response = handle_event(event, &service).await?;

    serde_json::to_writer(std::io::stdout(), &response)
        .context("Failed to write response to stdout")?;

    Ok(())
}
