//! Watch-side device event model
//!
//! The watch host reports battery state and phone connectivity. Components
//! subscribe to these through the same registry seam as lifecycle events.

use crate::events::Keyed;
use serde::{Deserialize, Serialize};

/// A battery state sample as delivered by the watch host.
///
/// `charge_percent` is 0-100 as reported; no clamping is applied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// Remaining charge, 0-100.
    pub charge_percent: u8,
    /// Whether the battery is currently charging.
    pub is_charging: bool,
    /// Whether the device is connected to external power.
    pub is_plugged: bool,
}

/// Subscription key for a device event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceEventKind {
    /// Battery state changed.
    BatteryStateChanged,
    /// Phone connectivity changed.
    ConnectivityChanged,
}

/// A device notification delivered by the watch host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceEvent {
    /// New battery state sample.
    BatteryStateChanged(BatteryReading),
    /// Phone connection established or lost.
    ConnectivityChanged {
        /// Whether the phone is reachable.
        connected: bool,
    },
}

impl Keyed for DeviceEvent {
    type Kind = DeviceEventKind;

    fn kind(&self) -> DeviceEventKind {
        match self {
            Self::BatteryStateChanged(_) => DeviceEventKind::BatteryStateChanged,
            Self::ConnectivityChanged { .. } => DeviceEventKind::ConnectivityChanged,
        }
    }
}

/// Icon shown alongside an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertIcon {
    /// A recovered or succeeded condition.
    Success,
    /// A failed operation.
    Failure,
    /// Battery below the warning threshold.
    LowBattery,
    /// Phone connection lost.
    NotConnected,
}
