//! Browser effect interface for external URL display
//!
//! The companion host can open a URL in the phone's browser. The call
//! completes when the request has been handed to the host; navigation itself
//! is the host's responsibility and is never awaited by components.

use crate::errors::TetherError;
use async_trait::async_trait;

/// Pure trait for external URL opening
#[async_trait]
pub trait BrowserEffects: Send + Sync {
    /// Hand a URL to the companion host for external display.
    async fn open_url(&self, url: &str) -> Result<(), TetherError>;
}
