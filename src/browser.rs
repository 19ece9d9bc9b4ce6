//! Single reused Chrome session driving navigation and capture.
//!
//! The sweep is strictly sequential: one browser process is launched at
//! startup and reused for every (URL, viewport) pair. There is no pool and
//! no parallel navigation.

use crate::{create_browser_config, Config, SweepError, ViewportSpec};
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tracing::{debug, info};

pub struct BrowserSession {
    browser: Browser,
    handler: tokio::task::JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a headless Chrome process and start polling its CDP event
    /// stream in a background task.
    pub async fn launch(config: &Config) -> Result<Self, SweepError> {
        let browser_config =
            create_browser_config(config).map_err(SweepError::BrowserLaunchFailed)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| SweepError::BrowserLaunchFailed(e.to_string()))?;

        // The handler is a Stream of CDP events and must be polled for the
        // browser connection to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::error!("CDP handler error: {}", e);
                    break;
                }
            }
            debug!("CDP handler stream ended");
        });

        info!("Browser session started");
        Ok(Self {
            browser,
            handler: handler_task,
        })
    }

    /// Open a blank page; the caller sets the viewport before navigating.
    pub async fn new_page(&self) -> Result<Page, SweepError> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| SweepError::NavigationFailed {
                url: "about:blank".to_string(),
                reason: e.to_string(),
            })
    }

    /// Resize the simulated browsing surface to the given viewport.
    pub async fn set_viewport(&self, page: &Page, spec: &ViewportSpec) -> Result<(), SweepError> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(spec.width)
            .height(spec.height)
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(SweepError::CaptureFailed)?;

        page.execute(params)
            .await
            .map_err(|e| SweepError::CaptureFailed(e.to_string()))?;

        debug!("Viewport set to {}x{} ({})", spec.width, spec.height, spec.name);
        Ok(())
    }

    /// Navigate the page and wait for the load signal to fire.
    pub async fn navigate(&self, page: &Page, url: &str) -> Result<(), SweepError> {
        page.goto(url)
            .await
            .map_err(|e| SweepError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        page.wait_for_navigation()
            .await
            .map_err(|e| SweepError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    /// Capture the entire rendered document as PNG, not just the visible
    /// viewport.
    pub async fn capture_full_page(&self, page: &Page) -> Result<Vec<u8>, SweepError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();

        page.screenshot(params)
            .await
            .map_err(|e| SweepError::CaptureFailed(e.to_string()))
    }

    pub async fn shutdown(mut self) {
        let _ = self.browser.close().await;
        self.handler.abort();
        info!("Browser session closed");
    }
}
