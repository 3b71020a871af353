//! End-to-end tests for the alert monitor: a mock watch host drives the
//! device event registry.

use std::sync::Arc;
use tether_app::alerts::{AlertMonitor, WARNING_TIMEOUT_MS};
use tether_core::device::{AlertIcon, BatteryReading, DeviceEvent, DeviceEventKind};
use tether_core::events::EventRegistry;
use tether_effects::{DeviceCall, MockConsoleHandler, MockDeviceHandler, MockTimerHandler};

struct WatchHost {
    registry: EventRegistry<DeviceEvent>,
    device: MockDeviceHandler,
    timer: MockTimerHandler,
}

fn make_host() -> WatchHost {
    let device = MockDeviceHandler::new();
    let timer = MockTimerHandler::new();
    let monitor = Arc::new(AlertMonitor::new(
        Arc::new(MockConsoleHandler::new()),
        Arc::new(device.clone()),
        Arc::new(timer.clone()),
    ));

    let mut registry = EventRegistry::new();
    monitor.register(&mut registry);

    WatchHost {
        registry,
        device,
        timer,
    }
}

#[test]
fn registration_creates_exactly_two_subscriptions() {
    let host = make_host();

    assert_eq!(host.registry.subscription_count(), 2);
    assert_eq!(
        host.registry
            .subscriptions_for(DeviceEventKind::BatteryStateChanged),
        1
    );
    assert_eq!(
        host.registry
            .subscriptions_for(DeviceEventKind::ConnectivityChanged),
        1
    );
}

#[tokio::test]
async fn discharging_below_threshold_alerts_once() {
    let host = make_host();

    host.registry
        .dispatch(&DeviceEvent::BatteryStateChanged(BatteryReading {
            charge_percent: 10,
            is_charging: false,
            is_plugged: false,
        }))
        .await
        .expect("battery dispatch succeeds");

    assert_eq!(
        host.device.calls(),
        vec![
            DeviceCall::ShowBanner("Battery at 10% Capacity".to_string(), AlertIcon::LowBattery),
            DeviceCall::VibrateLong,
            DeviceCall::Backlight(true),
            DeviceCall::Backlight(false),
            DeviceCall::HideBanner,
        ]
    );
    assert_eq!(host.timer.sleeps(), vec![WARNING_TIMEOUT_MS]);
}

#[tokio::test]
async fn healthy_battery_is_silent() {
    let host = make_host();

    host.registry
        .dispatch(&DeviceEvent::BatteryStateChanged(BatteryReading {
            charge_percent: 90,
            is_charging: true,
            is_plugged: true,
        }))
        .await
        .expect("battery dispatch succeeds");

    assert_eq!(host.device.call_count(), 0);
}

#[tokio::test]
async fn connectivity_transitions_alert_in_both_directions() {
    let host = make_host();

    host.registry
        .dispatch(&DeviceEvent::ConnectivityChanged { connected: false })
        .await
        .expect("connectivity dispatch succeeds");
    host.registry
        .dispatch(&DeviceEvent::ConnectivityChanged { connected: true })
        .await
        .expect("connectivity dispatch succeeds");

    let banners: Vec<_> = host
        .device
        .calls()
        .into_iter()
        .filter(|c| matches!(c, DeviceCall::ShowBanner(..)))
        .collect();
    assert_eq!(
        banners,
        vec![
            DeviceCall::ShowBanner(
                "Connection to Phone Lost".to_string(),
                AlertIcon::NotConnected
            ),
            DeviceCall::ShowBanner("Connection Restored".to_string(), AlertIcon::Success),
        ]
    );
}
