//! Tether Effects - stateless effect handlers
//!
//! Implementations of the effect traits defined in `tether-core`. Each
//! capability ships two handlers:
//!
//! - a **production** handler (`Real*Handler`) that delegates to the process
//!   boundary (`tracing` for diagnostics and host hand-offs, `tokio` for
//!   delays), and
//! - a **mock** handler (`Mock*Handler`) that records every invocation
//!   behind an `Arc<Mutex<_>>` so tests can share it with the component
//!   under test and assert on the exact calls made.
//!
//! Handlers are stateless with respect to the events they serve: nothing
//! here carries component logic, and nothing registers itself anywhere.

#![forbid(unsafe_code)]

/// Browser (external URL) handlers
pub mod browser;

/// Console/logging handlers
pub mod console;

/// Watch alert hardware handlers
pub mod device;

/// Timer handlers
pub mod timer;

pub use browser::{MockBrowserHandler, RealBrowserHandler};
pub use console::{MockConsoleHandler, RealConsoleHandler};
pub use device::{DeviceCall, MockDeviceHandler, RealDeviceHandler};
pub use timer::{MockTimerHandler, RealTimerHandler};
