//! Tether App - application components
//!
//! The two host-driven components of the companion core:
//!
//! - [`config::ConfigLifecycle`] reacts to the companion host's lifecycle
//!   events: it opens the configuration page on request and decodes the
//!   options payload the page returns.
//! - [`alerts::AlertMonitor`] reacts to the watch host's device events: it
//!   raises a transient alert on low battery or connectivity change.
//!
//! Both are parameterized by the effect traits in `tether-core` and
//! subscribe through an [`tether_core::EventRegistry`] handed to their
//! `register` call. Neither holds state across invocations.

#![forbid(unsafe_code)]

/// Watch-side alert monitoring
pub mod alerts;

/// Companion-side configuration lifecycle
pub mod config;

pub use alerts::{AlertMonitor, BATTERY_MINIMUM, WARNING_TIMEOUT_MS};
pub use config::{ConfigLifecycle, CONFIG_PAGE_URL};
