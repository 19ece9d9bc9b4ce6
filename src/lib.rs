//! # viewport-sweep
//!
//! Captures full-page screenshots of a list of URLs at a fixed set of
//! responsive breakpoint viewports, for visual regression checks. Each run
//! reads a newline-delimited `urls` file and writes one PNG per
//! (URL, viewport) pair into a timestamped directory:
//!
//! ```text
//! screenshots/{YYYYMMDD-HHmmss}/{sanitized-url}-{width}x{height}.png
//! ```
//!
//! Execution is strictly sequential: one headless Chrome session is reused
//! across the whole URLs x viewports cross-product. A failed navigation or
//! capture is logged and skipped so one bad URL never aborts the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use viewport_sweep::{
//!     BrowserSession, Config, RunTimestamp, ScreenshotOrchestrator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let session = BrowserSession::launch(&config).await?;
//!     let orchestrator =
//!         ScreenshotOrchestrator::new(config, RunTimestamp::now(), Some(session));
//!
//!     let urls = vec!["https://example.com".to_string()];
//!     let summary = orchestrator.run(&urls).await?;
//!     println!("Captured {} screenshots", summary.captured);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Sweep the default `urls` file into screenshots/{timestamp}/
//! viewport-sweep
//!
//! # Explicit input and output, shorter settle delay
//! viewport-sweep --input urls.txt --output shots --settle-ms 2000
//!
//! # Print the computed output paths without capturing
//! viewport-sweep --dry-run
//! ```

/// Configuration, viewport catalog, and browser launch settings
pub mod config;

/// Error types and fatality classification
pub mod error;

/// URL-to-filename sanitization
pub mod sanitize;

/// Run timestamp formatting
pub mod timestamp;

/// URL list loading
pub mod urls;

/// Single reused Chrome session
pub mod browser;

/// Sweep orchestration over URLs and viewports
pub mod orchestrator;

/// Command-line interface implementation
pub mod cli;

#[cfg(test)]
mod tests;

pub use browser::*;
pub use cli::*;
pub use config::*;
pub use error::*;
pub use orchestrator::*;
pub use sanitize::*;
pub use timestamp::*;
pub use urls::*;
