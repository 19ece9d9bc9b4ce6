//! Sweep orchestration: URLs in input order, viewports in catalog order.
//!
//! For each (URL, viewport) pair the orchestrator resizes the browsing
//! surface, navigates, waits for the page to settle, and writes a full-page
//! PNG to `{output_root}/{RunTimestamp}/{sanitized}-{width}x{height}.png`.
//! A failed task is logged and skipped; one bad URL never aborts the batch.

use crate::{sanitize_url, BrowserSession, Config, RunTimestamp, SweepError, ViewportSpec};
use std::path::PathBuf;
use tokio::fs;
use tokio::time::sleep;
use tracing::{info, warn};

/// Outcome counts for one run, across the full URLs x viewports cross-product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub captured: usize,
    pub failed: usize,
    /// Tasks whose paths were only computed and logged (dry-run mode)
    pub planned: usize,
}

pub struct ScreenshotOrchestrator {
    config: Config,
    timestamp: RunTimestamp,
    session: Option<BrowserSession>,
}

impl ScreenshotOrchestrator {
    /// Build an orchestrator from explicit immutable run state. `session` is
    /// `None` only in dry-run mode, where no browser is launched.
    pub fn new(config: Config, timestamp: RunTimestamp, session: Option<BrowserSession>) -> Self {
        Self {
            config,
            timestamp,
            session,
        }
    }

    /// Reclaim the browser session so the caller can shut it down.
    pub fn into_session(self) -> Option<BrowserSession> {
        self.session
    }

    /// The single timestamped directory every capture of this run lands in.
    pub fn output_dir(&self) -> PathBuf {
        self.config.output_root.join(self.timestamp.as_str())
    }

    /// Computed output path for one (URL, viewport) task.
    pub fn output_path(&self, url: &str, viewport: &ViewportSpec) -> PathBuf {
        self.output_dir().join(format!(
            "{}-{}x{}.png",
            sanitize_url(url),
            viewport.width,
            viewport.height
        ))
    }

    /// Process every URL against the full viewport catalog, in order.
    pub async fn run(&self, urls: &[String]) -> Result<RunSummary, SweepError> {
        let mut summary = RunSummary::default();

        if !self.config.dry_run {
            fs::create_dir_all(self.output_dir()).await?;
        }

        for url in urls {
            self.capture_all(url, &mut summary).await;
        }

        info!(
            "Sweep complete: {} captured, {} failed, {} planned",
            summary.captured, summary.failed, summary.planned
        );
        Ok(summary)
    }

    /// Sweep the viewport catalog for one URL, in catalog order.
    pub async fn capture_all(&self, url: &str, summary: &mut RunSummary) {
        for viewport in &self.config.viewports {
            let path = self.output_path(url, viewport);

            if self.config.dry_run {
                info!("Would capture {} -> {}", url, path.display());
                summary.planned += 1;
                continue;
            }

            match self.capture_one(url, viewport, &path).await {
                Ok(()) => {
                    info!(
                        "Saved screenshot for {} ({}x{}): {}",
                        url,
                        viewport.width,
                        viewport.height,
                        path.display()
                    );
                    summary.captured += 1;
                }
                Err(e) => {
                    warn!(
                        "Skipping {} at {}x{}: {}",
                        url, viewport.width, viewport.height, e
                    );
                    summary.failed += 1;
                }
            }
        }
    }

    /// One task: resize, navigate, settle, capture, write.
    async fn capture_one(
        &self,
        url: &str,
        viewport: &ViewportSpec,
        path: &std::path::Path,
    ) -> Result<(), SweepError> {
        let session = self.session.as_ref().ok_or(SweepError::SessionUnavailable)?;

        let page = session.new_page().await?;
        let result = self.capture_task(session, &page, url, viewport, path).await;
        let _ = page.close().await;
        result
    }

    async fn capture_task(
        &self,
        session: &BrowserSession,
        page: &chromiumoxide::page::Page,
        url: &str,
        viewport: &ViewportSpec,
        path: &std::path::Path,
    ) -> Result<(), SweepError> {
        // Viewport must be applied before navigation so responsive layouts
        // render at the target breakpoint from the first paint.
        session.set_viewport(page, viewport).await?;
        session.navigate(page, url).await?;

        // Settle timer on top of the load signal, for late asynchronous
        // content. Capture never starts before navigation plus this delay.
        sleep(self.config.settle_delay).await;

        let data = session.capture_full_page(page).await?;
        fs::write(path, data)
            .await
            .map_err(|e| SweepError::CaptureFailed(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
