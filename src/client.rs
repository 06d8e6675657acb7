//! Main console client with builder pattern.
//!
//! Provides the entry point for opening authenticated game consoles and
//! performing administrative operations against them.

use crate::console::GameConsole;
use crate::error::{ConsoleLinkError, Result};
use crate::timeouts::ConsoleLinkTimeouts;
use crate::transport::{HttpTransport, Transport};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Main console client.
///
/// Use [`ConsoleLinkClientBuilder`] to construct instances with custom
/// configuration. The client performs no login itself; it rides an
/// already-authenticated channel (the cookie store of the underlying HTTP
/// client, or whatever the supplied transport carries).
///
/// # Examples
///
/// ```rust,no_run
/// use console_link::ConsoleLinkClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ConsoleLinkClient::builder()
///     .base_url("https://console.example.com")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let game = client.open_game("/my/games/view/abc123def/XyZtoken99").await?;
/// println!("Opened '{}' ({})", game.name(), game.game_id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConsoleLinkClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    timeouts: ConsoleLinkTimeouts,
}

impl ConsoleLinkClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ConsoleLinkClientBuilder {
        ConsoleLinkClientBuilder::new()
    }

    /// Open a game console from the game's root page path.
    ///
    /// Fetches and parses the root page once, deriving the session-scoped
    /// identifiers every subsequent operation reuses. The returned
    /// [`GameConsole`] never refreshes them: if the remote session expires,
    /// further operations fail at the transport layer.
    pub async fn open_game(&self, game_path: &str) -> Result<GameConsole> {
        debug!("[SESSION] Opening game console at {}", game_path);
        let document = self.transport.fetch_document(game_path).await?;
        GameConsole::from_root_document(Arc::clone(&self.transport), &document)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured timeouts.
    pub fn timeouts(&self) -> &ConsoleLinkTimeouts {
        &self.timeouts
    }
}

/// Builder for configuring [`ConsoleLinkClient`] instances.
pub struct ConsoleLinkClientBuilder {
    base_url: Option<String>,
    timeouts: ConsoleLinkTimeouts,
    transport: Option<Arc<dyn Transport>>,
}

impl ConsoleLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeouts: ConsoleLinkTimeouts::default(),
            transport: None,
        }
    }

    /// Set the base URL of the console.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the response receive timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Set the full timeout configuration, overriding [`timeout`](Self::timeout).
    pub fn timeouts(mut self, timeouts: ConsoleLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Supply a custom transport instead of the built-in HTTP transport.
    ///
    /// Intended for alternative channels and for tests that stub the
    /// console; the base URL is ignored when a transport is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ConsoleLinkClient> {
        if let Some(transport) = self.transport {
            return Ok(ConsoleLinkClient {
                base_url: self.base_url.unwrap_or_default(),
                transport,
                timeouts: self.timeouts,
            });
        }

        let base_url = self
            .base_url
            .ok_or_else(|| ConsoleLinkError::Configuration("base_url is required".into()))?;

        // Cookie store carries the operator session across requests.
        let http_client = reqwest::Client::builder()
            .timeout(self.timeouts.receive_timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .cookie_store(true)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ConsoleLinkError::Configuration(e.to_string()))?;

        let transport = Arc::new(HttpTransport::new(base_url.clone(), http_client));
        Ok(ConsoleLinkClient {
            base_url,
            transport,
            timeouts: self.timeouts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let result = ConsoleLinkClient::builder()
            .base_url("https://console.example.com")
            .timeout(Duration::from_secs(10))
            .build();

        assert!(result.is_ok());
        let client = result.unwrap();
        assert_eq!(client.base_url(), "https://console.example.com");
        assert_eq!(client.timeouts().receive_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_missing_url() {
        let result = ConsoleLinkClient::builder().build();
        assert!(result.is_err());
    }
}
