//! Console effect interface for diagnostic output
//!
//! The companion host exposes a plain-string diagnostic sink. All component
//! logging flows through this trait so tests can capture it.

use crate::errors::TetherError;
use async_trait::async_trait;

/// Pure trait for console/logging operations
#[async_trait]
pub trait ConsoleEffects: Send + Sync {
    /// Log an info message
    async fn log_info(&self, message: &str) -> Result<(), TetherError>;

    /// Log a warning message
    async fn log_warn(&self, message: &str) -> Result<(), TetherError>;

    /// Log an error message
    async fn log_error(&self, message: &str) -> Result<(), TetherError>;

    /// Log a debug message
    async fn log_debug(&self, message: &str) -> Result<(), TetherError>;
}
