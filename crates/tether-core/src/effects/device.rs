//! Device effect interface for watch-side alerts
//!
//! Banner display, vibration, and backlight control on the watch. The alert
//! monitor drives these as a unit when raising a transient alert.

use crate::device::AlertIcon;
use crate::errors::TetherError;
use async_trait::async_trait;

/// Pure trait for watch alert hardware
#[async_trait]
pub trait DeviceEffects: Send + Sync {
    /// Show a full-screen alert banner with a message and icon.
    async fn show_banner(&self, message: &str, icon: AlertIcon) -> Result<(), TetherError>;

    /// Hide the alert banner.
    async fn hide_banner(&self) -> Result<(), TetherError>;

    /// Emit one long vibration pulse.
    async fn vibrate_long(&self) -> Result<(), TetherError>;

    /// Switch the backlight on or off.
    async fn set_backlight(&self, on: bool) -> Result<(), TetherError>;
}
