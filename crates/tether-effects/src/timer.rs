//! Timer effect handlers
//!
//! The production handler sleeps on the tokio clock. The mock returns
//! immediately and records each requested duration, so alert-timeout tests
//! run without waiting.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tether_core::effects::TimerEffects;
use tether_core::TetherError;

/// Production timer handler backed by the tokio clock
#[derive(Debug, Clone, Default)]
pub struct RealTimerHandler;

impl RealTimerHandler {
    /// Create a new production timer handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TimerEffects for RealTimerHandler {
    async fn sleep_ms(&self, ms: u64) -> Result<(), TetherError> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(())
    }
}

/// Mock timer handler recording requested delays for testing
#[derive(Debug, Clone, Default)]
pub struct MockTimerHandler {
    sleeps: Arc<Mutex<Vec<u64>>>,
}

impl MockTimerHandler {
    /// Create a new mock timer handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all requested sleep durations in milliseconds (for testing)
    pub fn sleeps(&self) -> Vec<u64> {
        self.sleeps.lock().expect("timer lock").clone()
    }
}

#[async_trait]
impl TimerEffects for MockTimerHandler {
    async fn sleep_ms(&self, ms: u64) -> Result<(), TetherError> {
        self.sleeps.lock().expect("timer lock").push(ms);
        Ok(())
    }
}
