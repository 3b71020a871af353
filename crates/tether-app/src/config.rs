//! Companion-side configuration lifecycle
//!
//! The companion host delivers three lifecycle events. This component logs
//! each one, opens the configuration page when asked, and decodes the
//! options payload the page returns when it closes. Each event is handled
//! independently; no ordering is assumed between them beyond what the host
//! guarantees.

use async_trait::async_trait;
use std::sync::Arc;
use tether_core::effects::{BrowserEffects, ConsoleEffects};
use tether_core::events::{EventHandler, EventRegistry};
use tether_core::lifecycle::{LifecycleEvent, LifecycleEventKind};
use tether_core::options::{parse_options, ConfigOptions};
use tether_core::TetherError;

/// Configuration page opened on the phone when the user edits settings.
pub const CONFIG_PAGE_URL: &str = "https://tether-dev.github.io/tether-config/index.html";

/// Reacts to the companion host's configuration lifecycle events.
///
/// Constructed with its capability handlers (dependency injection) and
/// subscribed through [`ConfigLifecycle::register`]; never registers itself
/// as a module-load side effect.
pub struct ConfigLifecycle<C, B> {
    console: Arc<C>,
    browser: Arc<B>,
    config_url: String,
}

impl<C, B> ConfigLifecycle<C, B>
where
    C: ConsoleEffects + 'static,
    B: BrowserEffects + 'static,
{
    /// Create a handler using the default configuration page URL.
    pub fn new(console: Arc<C>, browser: Arc<B>) -> Self {
        Self {
            console,
            browser,
            config_url: CONFIG_PAGE_URL.to_string(),
        }
    }

    /// Override the configuration page URL.
    pub fn with_config_url(mut self, url: impl Into<String>) -> Self {
        self.config_url = url.into();
        self
    }

    /// The configuration page URL this handler opens.
    pub fn config_url(&self) -> &str {
        &self.config_url
    }

    /// Subscribe this handler to the three lifecycle event kinds.
    pub fn register(self: Arc<Self>, registry: &mut EventRegistry<LifecycleEvent>) {
        registry.subscribe(LifecycleEventKind::Ready, self.clone());
        registry.subscribe(LifecycleEventKind::ShowConfiguration, self.clone());
        registry.subscribe(LifecycleEventKind::WebviewClosed, self);
    }

    /// Startup notification. One diagnostic line, no other side effect.
    pub async fn on_ready(&self) -> Result<(), TetherError> {
        self.console.log_info("ready received").await
    }

    /// The user opened settings: log, then hand the configuration page URL
    /// to the host browser. The open is fire-and-forget; the result of
    /// navigation is never inspected.
    pub async fn on_show_configuration(&self) -> Result<(), TetherError> {
        self.console.log_info("showing configuration").await?;
        self.browser.open_url(&self.config_url).await
    }

    /// The configuration page closed: decode the percent-encoded JSON
    /// payload into [`ConfigOptions`], log its canonical rendering, and
    /// return it. Decode failures are not caught here; they surface through
    /// the registry's dispatch result.
    pub async fn on_webview_closed(&self, response: &str) -> Result<ConfigOptions, TetherError> {
        self.console.log_info("configuration closed").await?;
        let options = parse_options(response)?;
        self.console
            .log_info(&format!("Options = {}", options))
            .await?;
        Ok(options)
    }
}

#[async_trait]
impl<C, B> EventHandler<LifecycleEvent> for ConfigLifecycle<C, B>
where
    C: ConsoleEffects + 'static,
    B: BrowserEffects + 'static,
{
    async fn handle(&self, event: &LifecycleEvent) -> Result<(), TetherError> {
        match event {
            LifecycleEvent::Ready => self.on_ready().await,
            LifecycleEvent::ShowConfiguration => self.on_show_configuration().await,
            LifecycleEvent::WebviewClosed { response } => {
                self.on_webview_closed(response).await?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_effects::{MockBrowserHandler, MockConsoleHandler};

    fn make_handler() -> (
        Arc<ConfigLifecycle<MockConsoleHandler, MockBrowserHandler>>,
        MockConsoleHandler,
        MockBrowserHandler,
    ) {
        let console = MockConsoleHandler::new();
        let browser = MockBrowserHandler::new();
        let handler = Arc::new(ConfigLifecycle::new(
            Arc::new(console.clone()),
            Arc::new(browser.clone()),
        ));
        (handler, console, browser)
    }

    #[tokio::test]
    async fn ready_logs_once() {
        let (handler, console, browser) = make_handler();
        handler.on_ready().await.expect("ready succeeds");

        assert_eq!(console.get_logs_with_level("INFO"), vec!["ready received"]);
        assert_eq!(browser.open_count(), 0);
    }

    #[tokio::test]
    async fn show_configuration_opens_fixed_url() {
        let (handler, console, browser) = make_handler();
        handler
            .on_show_configuration()
            .await
            .expect("show configuration succeeds");

        assert_eq!(console.log_count(), 1);
        assert_eq!(browser.opened_urls(), vec![CONFIG_PAGE_URL.to_string()]);
    }

    #[tokio::test]
    async fn webview_closed_decodes_and_logs_options() {
        let (handler, console, _browser) = make_handler();
        // encodeURIComponent('{"a":1}')
        let options = handler
            .on_webview_closed("%7B%22a%22%3A1%7D")
            .await
            .expect("payload decodes");

        assert_eq!(options.get("a"), Some(&serde_json::Value::from(1)));
        let logs = console.get_logs_with_level("INFO");
        assert_eq!(logs, vec!["configuration closed", r#"Options = {"a":1}"#]);
    }

    #[tokio::test]
    async fn webview_closed_propagates_parse_failure() {
        let (handler, console, _browser) = make_handler();
        let err = handler
            .on_webview_closed("not-valid-%")
            .await
            .expect_err("malformed encoding fails");

        assert!(matches!(err, TetherError::Parse { .. }));
        // Entry line only; no "Options = ..." line on failure.
        assert_eq!(
            console.get_logs_with_level("INFO"),
            vec!["configuration closed"]
        );
    }

    #[tokio::test]
    async fn config_url_override() {
        let console = Arc::new(MockConsoleHandler::new());
        let browser = MockBrowserHandler::new();
        let handler = ConfigLifecycle::new(console, Arc::new(browser.clone()))
            .with_config_url("https://example.invalid/settings");

        handler
            .on_show_configuration()
            .await
            .expect("show configuration succeeds");
        assert_eq!(
            browser.opened_urls(),
            vec!["https://example.invalid/settings".to_string()]
        );
    }
}
