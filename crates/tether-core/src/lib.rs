//! Tether Core - shared foundation for the companion core
//!
//! This crate provides the event model, the options payload, and the pure
//! effect interfaces used by every Tether component. It contains no handler
//! implementations and no application logic.
//!
//! # Layers
//!
//! - **Event model**: lifecycle events delivered by the companion host
//!   (`ready`, `showConfiguration`, `webviewclosed`) and device events
//!   delivered by the watch host (battery state, connectivity).
//! - **Effect interfaces**: pure trait signatures for every side effect a
//!   component may request (`ConsoleEffects`, `BrowserEffects`,
//!   `DeviceEffects`, `TimerEffects`). Handlers live in `tether-effects`.
//! - **Registry**: the explicit subscription seam between a host runtime and
//!   the components it drives. Components subscribe through a registry value
//!   passed to `register`, never through module-load side effects, so every
//!   handler can be exercised against mock hosts.

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Subscription registry and dispatch seam
pub mod events;

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Companion-side lifecycle event model
pub mod lifecycle;

/// Watch-side device event model
pub mod device;

/// Configuration options payload decoding
pub mod options;

pub use device::{AlertIcon, BatteryReading, DeviceEvent, DeviceEventKind};
pub use errors::TetherError;
pub use events::{EventHandler, EventRegistry, Keyed};
pub use lifecycle::{LifecycleEvent, LifecycleEventKind};
pub use options::{parse_options, ConfigOptions, OptionsError};
