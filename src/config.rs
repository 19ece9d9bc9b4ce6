//! Configuration management with serde serialization/deserialization
//!
//! This module provides the run configuration for the sweep tool, including
//! the static viewport catalog, settle timing, and browser launch settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A named viewport dimension used to render a page for capture.
///
/// The catalog entries are immutable and statically defined; the name is a
/// human-readable label and the dimensions drive the simulated browsing
/// surface size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewportSpec {
    pub name: String,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl ViewportSpec {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }
}

/// The fixed ordered set of breakpoint viewports swept for every URL.
///
/// Height is 2000 for every entry: a deliberately tall surface so full-page
/// capture has room to render. It is not derived from actual page content
/// height, so very tall pages may still be clipped (known limitation).
pub fn default_viewports() -> Vec<ViewportSpec> {
    vec![
        ViewportSpec::new("alpha", 320, 2000),
        ViewportSpec::new("bravo", 768, 2000),
        ViewportSpec::new("charlie", 1024, 2000),
        ViewportSpec::new("david", 1280, 2000),
    ]
}

/// Main configuration structure for the sweep tool
///
/// Built once at startup (from defaults, an optional JSON file, and CLI
/// overrides) and passed into the orchestrator at construction. There is no
/// ambient module-level run state.
///
/// # Examples
///
/// ```rust
/// use viewport_sweep::Config;
///
/// // Use default configuration
/// let config = Config::default();
///
/// // Create custom configuration
/// let config = Config {
///     settle_delay: std::time::Duration::from_secs(2),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path to the newline-delimited URL list (default: `urls`)
    pub input_path: PathBuf,

    /// Root directory under which each run's timestamped directory is
    /// created (default: `screenshots`)
    pub output_root: PathBuf,

    /// Delay after the page-ready signal before capturing (default: 5 seconds)
    ///
    /// A fallback timer for asynchronous content (images, fonts, scripts)
    /// that keeps loading after navigation completes.
    pub settle_delay: Duration,

    /// Ordered viewport catalog swept for every URL
    pub viewports: Vec<ViewportSpec>,

    /// Path to Chrome/Chromium executable (default: auto-detect)
    pub chrome_path: Option<String>,

    /// Compute and log output paths without launching a browser or writing
    /// any files (default: false)
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("urls"),
            output_root: PathBuf::from("screenshots"),
            settle_delay: Duration::from_millis(5000),
            viewports: default_viewports(),
            chrome_path: None,
            dry_run: false,
        }
    }
}

/// Generate Chrome command-line arguments for headless capture
///
/// The window size is taken from the widest catalog entry; per-capture
/// dimensions are applied later through device metrics overrides.
pub fn get_chrome_args(config: &Config) -> Vec<String> {
    let (width, height) = config
        .viewports
        .iter()
        .map(|v| (v.width, v.height))
        .max()
        .unwrap_or((1280, 2000));

    vec![
        "--headless".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--disable-extensions".to_string(),
        "--disable-default-apps".to_string(),
        "--disable-sync".to_string(),
        "--no-first-run".to_string(),
        "--hide-scrollbars".to_string(),
        "--ignore-certificate-errors".to_string(),
        format!("--window-size={width},{height}"),
    ]
}

pub fn create_browser_config(
    config: &Config,
) -> Result<chromiumoxide::browser::BrowserConfig, String> {
    use chromiumoxide::browser::BrowserConfig;

    let mut builder = BrowserConfig::builder().args(get_chrome_args(config));

    if let Some(chrome_path) = &config.chrome_path {
        builder = builder.chrome_executable(chrome_path);
    }

    builder.build()
}
