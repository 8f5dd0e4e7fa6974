//! Settings for [`HyperTransport`](crate::HyperTransport).
//!
//! Configuration is code only: start from [`ClientConfig::default`] or
//! [`ClientConfig::builder`] and override what differs.

use std::time::Duration;

/// Timeouts and pool limits of a [`HyperTransport`](crate::HyperTransport).
///
/// | setting              | default |
/// |----------------------|---------|
/// | `timeout`            | 30 s    |
/// | `connect_timeout`    | 10 s    |
/// | `pool_idle_per_host` | 32      |
/// | `pool_idle_timeout`  | 90 s    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Longest wait for the response head, and separately for each body chunk.
    pub timeout: Duration,
    /// Longest wait for the TCP handshake.
    pub connect_timeout: Duration,
    /// Idle connections the pool may keep for a single host.
    pub pool_idle_per_host: usize,
    /// Age at which an idle pooled connection is closed.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Start from the defaults and override selected settings.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Fluent overrides on top of [`ClientConfig::default`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override [`ClientConfig::timeout`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override [`ClientConfig::connect_timeout`].
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Override [`ClientConfig::pool_idle_per_host`].
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config.pool_idle_per_host = count;
        self
    }

    /// Override [`ClientConfig::pool_idle_timeout`].
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Finish with the settings chosen so far.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
