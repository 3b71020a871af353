//! Watch alert hardware handlers
//!
//! Banner, vibration, and backlight control. The production handler records
//! each request at the hardware boundary; the watch host that embeds this
//! library performs the physical action. The mock keeps a full call
//! transcript so tests can assert on ordering across the four operations.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tether_core::device::AlertIcon;
use tether_core::effects::DeviceEffects;
use tether_core::TetherError;

/// Production device handler delegating to the watch host
#[derive(Debug, Clone, Default)]
pub struct RealDeviceHandler;

impl RealDeviceHandler {
    /// Create a new production device handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeviceEffects for RealDeviceHandler {
    async fn show_banner(&self, message: &str, icon: AlertIcon) -> Result<(), TetherError> {
        tracing::info!(message, ?icon, "showing alert banner");
        Ok(())
    }

    async fn hide_banner(&self) -> Result<(), TetherError> {
        tracing::debug!("hiding alert banner");
        Ok(())
    }

    async fn vibrate_long(&self) -> Result<(), TetherError> {
        tracing::debug!("long vibration pulse");
        Ok(())
    }

    async fn set_backlight(&self, on: bool) -> Result<(), TetherError> {
        tracing::debug!(on, "backlight");
        Ok(())
    }
}

/// One recorded device capability call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    /// Banner shown with message and icon.
    ShowBanner(String, AlertIcon),
    /// Banner hidden.
    HideBanner,
    /// Long vibration pulse.
    VibrateLong,
    /// Backlight switched on or off.
    Backlight(bool),
}

/// Mock device handler recording a call transcript for testing
#[derive(Debug, Clone, Default)]
pub struct MockDeviceHandler {
    calls: Arc<Mutex<Vec<DeviceCall>>>,
}

impl MockDeviceHandler {
    /// Create a new mock device handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the full call transcript (for testing)
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().expect("device lock").clone()
    }

    /// Number of capability calls made (for testing)
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("device lock").len()
    }

    /// Clear the transcript (for testing)
    pub fn clear(&self) {
        self.calls.lock().expect("device lock").clear();
    }

    fn record(&self, call: DeviceCall) {
        self.calls.lock().expect("device lock").push(call);
    }
}

#[async_trait]
impl DeviceEffects for MockDeviceHandler {
    async fn show_banner(&self, message: &str, icon: AlertIcon) -> Result<(), TetherError> {
        self.record(DeviceCall::ShowBanner(message.to_string(), icon));
        Ok(())
    }

    async fn hide_banner(&self) -> Result<(), TetherError> {
        self.record(DeviceCall::HideBanner);
        Ok(())
    }

    async fn vibrate_long(&self) -> Result<(), TetherError> {
        self.record(DeviceCall::VibrateLong);
        Ok(())
    }

    async fn set_backlight(&self, on: bool) -> Result<(), TetherError> {
        self.record(DeviceCall::Backlight(on));
        Ok(())
    }
}
