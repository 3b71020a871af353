//! Watch-side alert monitoring
//!
//! Subscribes to battery-state and connectivity events and raises a
//! transient alert when something needs the wearer's attention: banner plus
//! long vibration plus backlight, cleared after a fixed timeout. Charging or
//! plugged devices never trigger the low-battery warning.

use async_trait::async_trait;
use std::sync::Arc;
use tether_core::device::{AlertIcon, BatteryReading, DeviceEvent, DeviceEventKind};
use tether_core::effects::{ConsoleEffects, DeviceEffects, TimerEffects};
use tether_core::events::{EventHandler, EventRegistry};
use tether_core::TetherError;

/// Warn at or below this charge percentage.
pub const BATTERY_MINIMUM: u8 = 15;

/// How long an alert stays on screen, in milliseconds.
pub const WARNING_TIMEOUT_MS: u64 = 3000;

/// Reacts to the watch host's device events with transient alerts.
pub struct AlertMonitor<C, D, T> {
    console: Arc<C>,
    device: Arc<D>,
    timer: Arc<T>,
}

impl<C, D, T> AlertMonitor<C, D, T>
where
    C: ConsoleEffects + 'static,
    D: DeviceEffects + 'static,
    T: TimerEffects + 'static,
{
    /// Create a monitor from its capability handlers.
    pub fn new(console: Arc<C>, device: Arc<D>, timer: Arc<T>) -> Self {
        Self {
            console,
            device,
            timer,
        }
    }

    /// Subscribe this monitor to the two device event kinds.
    pub fn register(self: Arc<Self>, registry: &mut EventRegistry<DeviceEvent>) {
        registry.subscribe(DeviceEventKind::BatteryStateChanged, self.clone());
        registry.subscribe(DeviceEventKind::ConnectivityChanged, self);
    }

    /// Battery sample from the host. Warns only when discharging at or
    /// below [`BATTERY_MINIMUM`] percent.
    pub async fn on_battery(&self, reading: &BatteryReading) -> Result<(), TetherError> {
        if !reading.is_charging
            && !reading.is_plugged
            && reading.charge_percent <= BATTERY_MINIMUM
        {
            let message = format!("Battery at {}% Capacity", reading.charge_percent);
            self.notify(&message, AlertIcon::LowBattery).await?;
        }
        Ok(())
    }

    /// Connectivity change from the host.
    pub async fn on_connectivity(&self, connected: bool) -> Result<(), TetherError> {
        if connected {
            self.notify("Connection Restored", AlertIcon::Success).await
        } else {
            self.notify("Connection to Phone Lost", AlertIcon::NotConnected)
                .await
        }
    }

    /// Raise a transient alert: banner, long vibration, backlight on, then
    /// after [`WARNING_TIMEOUT_MS`] backlight off and banner hidden.
    pub async fn notify(&self, message: &str, icon: AlertIcon) -> Result<(), TetherError> {
        self.console
            .log_debug(&format!("alert raised: {}", message))
            .await?;
        self.device.show_banner(message, icon).await?;
        self.device.vibrate_long().await?;
        self.device.set_backlight(true).await?;
        self.timer.sleep_ms(WARNING_TIMEOUT_MS).await?;
        self.clear_warning().await
    }

    async fn clear_warning(&self) -> Result<(), TetherError> {
        self.device.set_backlight(false).await?;
        self.device.hide_banner().await
    }
}

#[async_trait]
impl<C, D, T> EventHandler<DeviceEvent> for AlertMonitor<C, D, T>
where
    C: ConsoleEffects + 'static,
    D: DeviceEffects + 'static,
    T: TimerEffects + 'static,
{
    async fn handle(&self, event: &DeviceEvent) -> Result<(), TetherError> {
        match event {
            DeviceEvent::BatteryStateChanged(reading) => self.on_battery(reading).await,
            DeviceEvent::ConnectivityChanged { connected } => {
                self.on_connectivity(*connected).await
            }
        }
    }
}
