//! Browser effect handlers
//!
//! The production handler records the hand-off at the process boundary;
//! actual navigation is performed by the companion host that embeds this
//! library. The mock captures every requested URL.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tether_core::effects::BrowserEffects;
use tether_core::TetherError;

/// Production browser handler handing URLs to the companion host
#[derive(Debug, Clone, Default)]
pub struct RealBrowserHandler;

impl RealBrowserHandler {
    /// Create a new production browser handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BrowserEffects for RealBrowserHandler {
    async fn open_url(&self, url: &str) -> Result<(), TetherError> {
        tracing::info!(url, "opening external URL");
        Ok(())
    }
}

/// Mock browser handler capturing opened URLs for testing
#[derive(Debug, Clone, Default)]
pub struct MockBrowserHandler {
    opened: Arc<Mutex<Vec<String>>>,
}

impl MockBrowserHandler {
    /// Create a new mock browser handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all opened URLs (for testing)
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.lock().expect("browser lock").clone()
    }

    /// Number of open calls made (for testing)
    pub fn open_count(&self) -> usize {
        self.opened.lock().expect("browser lock").len()
    }
}

#[async_trait]
impl BrowserEffects for MockBrowserHandler {
    async fn open_url(&self, url: &str) -> Result<(), TetherError> {
        self.opened.lock().expect("browser lock").push(url.to_string());
        Ok(())
    }
}
