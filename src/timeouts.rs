//! Timeout configuration for console client operations.
//!
//! Centralizes the HTTP timeout knobs applied to the underlying client.

use std::time::Duration;

/// Timeout configuration for console client operations.
///
/// # Examples
///
/// ```rust
/// use console_link::ConsoleLinkTimeouts;
/// use std::time::Duration;
///
/// // Use defaults (recommended for most cases)
/// let timeouts = ConsoleLinkTimeouts::default();
///
/// // Custom timeouts for high-latency environments
/// let timeouts = ConsoleLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(60))
///     .receive_timeout(Duration::from_secs(120))
///     .build();
///
/// // Aggressive timeouts for local development
/// let timeouts = ConsoleLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Timeout for receiving a full response after a request is sent.
    /// Default: 30 seconds
    pub receive_timeout: Duration,
}

impl Default for ConsoleLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            receive_timeout: Duration::from_secs(30),
        }
    }
}

impl ConsoleLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> ConsoleLinkTimeoutsBuilder {
        ConsoleLinkTimeoutsBuilder::new()
    }

    /// Create timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            receive_timeout: Duration::from_secs(5),
        }
    }

    /// Create timeouts optimized for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            receive_timeout: Duration::from_secs(120),
        }
    }
}

/// Builder for [`ConsoleLinkTimeouts`].
pub struct ConsoleLinkTimeoutsBuilder {
    timeouts: ConsoleLinkTimeouts,
}

impl ConsoleLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: ConsoleLinkTimeouts::default(),
        }
    }

    /// Set the connection establishment timeout.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the response receive timeout.
    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Build the timeout configuration.
    pub fn build(self) -> ConsoleLinkTimeouts {
        self.timeouts
    }
}

impl Default for ConsoleLinkTimeoutsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
