use clap::Parser;
use tracing::{error, info};
use viewport_sweep::{
    load_config, read_urls, setup_logging, BrowserSession, Cli, RunTimestamp,
    ScreenshotOrchestrator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    setup_logging(args.verbose)?;

    info!("Starting viewport-sweep v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args).await?;

    // Missing input file is fatal before any browser work starts.
    let urls = read_urls(&config.input_path).await?;
    info!("Loaded {} URLs from {}", urls.len(), config.input_path.display());

    let timestamp = RunTimestamp::now();
    info!("Run timestamp: {}", timestamp);

    let session = if config.dry_run {
        None
    } else {
        Some(BrowserSession::launch(&config).await?)
    };

    let orchestrator = ScreenshotOrchestrator::new(config, timestamp, session);
    let result = orchestrator.run(&urls).await;

    if let Some(session) = orchestrator.into_session() {
        session.shutdown().await;
    }

    match result {
        Ok(summary) => {
            info!(
                "Done: {} captured, {} failed, {} planned",
                summary.captured, summary.failed, summary.planned
            );
            Ok(())
        }
        Err(e) => {
            error!("Sweep aborted: {}", e);
            std::process::exit(1);
        }
    }
}
