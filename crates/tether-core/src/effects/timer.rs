//! Timer effect interface
//!
//! Cooperative delay used to clear transient alerts. Tests substitute a mock
//! that returns immediately and records the requested durations.

use crate::errors::TetherError;
use async_trait::async_trait;

/// Pure trait for cooperative delays
#[async_trait]
pub trait TimerEffects: Send + Sync {
    /// Suspend the caller for at least `ms` milliseconds.
    async fn sleep_ms(&self, ms: u64) -> Result<(), TetherError>;
}
