//! Companion-side lifecycle event model
//!
//! The companion host delivers three lifecycle notifications to the
//! application: once at startup, when the user opens the configuration page,
//! and when that page closes with an options payload. Events are tagged with
//! a [`LifecycleEventKind`] used as the subscription key in the registry.

use crate::events::Keyed;
use serde::{Deserialize, Serialize};

/// Subscription key for a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleEventKind {
    /// The host runtime finished starting the application.
    Ready,
    /// The user requested the configuration page.
    ShowConfiguration,
    /// The configuration page closed and returned a payload.
    WebviewClosed,
}

impl LifecycleEventKind {
    /// The host's wire name for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::ShowConfiguration => "showConfiguration",
            Self::WebviewClosed => "webviewclosed",
        }
    }

    /// Resolve a host wire name back to a kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ready" => Some(Self::Ready),
            "showConfiguration" => Some(Self::ShowConfiguration),
            "webviewclosed" => Some(Self::WebviewClosed),
            _ => None,
        }
    }
}

/// A lifecycle notification delivered by the companion host.
///
/// Only `WebviewClosed` carries a payload: the percent-encoded JSON string
/// produced by the configuration page when it closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// Application startup completed.
    Ready,
    /// The configuration page should be opened.
    ShowConfiguration,
    /// The configuration page closed.
    WebviewClosed {
        /// Percent-encoded JSON options payload.
        response: String,
    },
}

impl Keyed for LifecycleEvent {
    type Kind = LifecycleEventKind;

    fn kind(&self) -> LifecycleEventKind {
        match self {
            Self::Ready => LifecycleEventKind::Ready,
            Self::ShowConfiguration => LifecycleEventKind::ShowConfiguration,
            Self::WebviewClosed { .. } => LifecycleEventKind::WebviewClosed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for kind in [
            LifecycleEventKind::Ready,
            LifecycleEventKind::ShowConfiguration,
            LifecycleEventKind::WebviewClosed,
        ] {
            assert_eq!(LifecycleEventKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(LifecycleEventKind::from_name("appmessage"), None);
    }

    #[test]
    fn event_kind_matches_payload_variant() {
        let event = LifecycleEvent::WebviewClosed {
            response: "%7B%7D".to_string(),
        };
        assert_eq!(event.kind(), LifecycleEventKind::WebviewClosed);
    }
}
