//! Console effect handlers
//!
//! Standard implementations of the `ConsoleEffects` trait defined in
//! `tether-core`. The production handler sinks to `tracing`; subscriber
//! installation belongs to the embedding application, not to this crate.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tether_core::effects::ConsoleEffects;
use tether_core::TetherError;

/// Production console handler delegating to `tracing`
#[derive(Debug, Clone, Default)]
pub struct RealConsoleHandler;

impl RealConsoleHandler {
    /// Create a new production console handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsoleEffects for RealConsoleHandler {
    async fn log_info(&self, message: &str) -> Result<(), TetherError> {
        tracing::info!("{}", message);
        Ok(())
    }

    async fn log_warn(&self, message: &str) -> Result<(), TetherError> {
        tracing::warn!("{}", message);
        Ok(())
    }

    async fn log_error(&self, message: &str) -> Result<(), TetherError> {
        tracing::error!("{}", message);
        Ok(())
    }

    async fn log_debug(&self, message: &str) -> Result<(), TetherError> {
        tracing::debug!("{}", message);
        Ok(())
    }
}

/// Mock console handler capturing log lines for testing
#[derive(Debug, Clone, Default)]
pub struct MockConsoleHandler {
    logs: Arc<Mutex<VecDeque<(String, String)>>>,
}

impl MockConsoleHandler {
    /// Create a new mock console handler
    pub fn new() -> Self {
        Self::default()
    }

    fn add_log(&self, level: &str, message: &str) {
        self.logs
            .lock()
            .expect("console log lock")
            .push_back((level.to_string(), message.to_string()));
    }

    /// Get all captured log messages (for testing)
    pub fn get_logs(&self) -> Vec<(String, String)> {
        let logs = self.logs.lock().expect("console log lock");
        logs.iter().cloned().collect()
    }

    /// Get logs of a specific level (for testing)
    pub fn get_logs_with_level(&self, level: &str) -> Vec<String> {
        let logs = self.logs.lock().expect("console log lock");
        logs.iter()
            .filter(|(l, _)| l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Number of captured log calls (for testing)
    pub fn log_count(&self) -> usize {
        self.logs.lock().expect("console log lock").len()
    }

    /// Clear all captured logs (for testing)
    pub fn clear(&self) {
        self.logs.lock().expect("console log lock").clear();
    }
}

#[async_trait]
impl ConsoleEffects for MockConsoleHandler {
    async fn log_info(&self, message: &str) -> Result<(), TetherError> {
        self.add_log("INFO", message);
        Ok(())
    }

    async fn log_warn(&self, message: &str) -> Result<(), TetherError> {
        self.add_log("WARN", message);
        Ok(())
    }

    async fn log_error(&self, message: &str) -> Result<(), TetherError> {
        self.add_log("ERROR", message);
        Ok(())
    }

    async fn log_debug(&self, message: &str) -> Result<(), TetherError> {
        self.add_log("DEBUG", message);
        Ok(())
    }
}
