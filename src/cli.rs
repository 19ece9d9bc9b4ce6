use crate::{Config, SweepError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "viewport-sweep")]
#[command(about = "Capture full-page screenshots across responsive breakpoints")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[arg(short, long, help = "Input file containing URLs (one per line)")]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Root output directory for screenshot runs")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Settle delay in milliseconds after navigation")]
    pub settle_ms: Option<u64>,

    #[arg(long, help = "Configuration file path (JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Chrome executable path")]
    pub chrome_path: Option<String>,

    #[arg(long, help = "Log computed output paths without capturing anything")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,
}

/// Build the run configuration: JSON config file (or defaults), then CLI
/// overrides, then validation.
pub async fn load_config(args: &Cli) -> Result<Config, SweepError> {
    let mut config = if let Some(config_path) = &args.config {
        let content = fs::read_to_string(config_path).await?;
        serde_json::from_str(&content)?
    } else {
        Config::default()
    };

    if let Some(input) = &args.input {
        config.input_path = input.clone();
    }

    if let Some(output) = &args.output {
        config.output_root = output.clone();
    }

    if let Some(settle_ms) = args.settle_ms {
        config.settle_delay = Duration::from_millis(settle_ms);
    }

    if let Some(chrome_path) = &args.chrome_path {
        config.chrome_path = Some(chrome_path.clone());
    }

    if args.dry_run {
        config.dry_run = true;
    }

    validate_config(&config)?;

    info!("Input file: {}", config.input_path.display());
    info!("Output root: {}", config.output_root.display());
    info!("Settle delay: {:?}", config.settle_delay);
    info!("Viewports: {}", config.viewports.len());

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), SweepError> {
    if config.viewports.is_empty() {
        return Err(SweepError::ConfigurationError(
            "viewport catalog must not be empty".to_string(),
        ));
    }

    for viewport in &config.viewports {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(SweepError::ConfigurationError(format!(
                "viewport '{}' must have positive dimensions",
                viewport.name
            )));
        }
    }

    Ok(())
}

pub fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    Ok(())
}
