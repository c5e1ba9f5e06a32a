//! Session configuration.

use std::time::Duration;

use identity::IdentityConfig;
use throttle::DEFAULT_MIN_SEND_INTERVAL;

/// Default environment key holding the collector configuration value.
pub const DEFAULT_CONFIG_KEY: &str = "XFERMON_CONFIG";

/// Default category suffix for bucket names.
///
/// Batches are routed to `Job_<category>` when the transfer is job-scoped
/// and `Other_<category>` otherwise.
pub const DEFAULT_CATEGORY: &str = "Transfers";

/// Configuration for a [`ProgressMonitor`](crate::ProgressMonitor).
///
/// The defaults reproduce the standard deployment; hosts embedding the
/// reporter override individual fields with the `with_*` builders.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use monitor::MonitorConfig;
///
/// let config = MonitorConfig::default()
///     .with_category("Replication")
///     .with_min_send_interval(Duration::from_secs(30));
/// assert_eq!(config.category(), "Replication");
/// ```
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    config_key: String,
    category: String,
    min_send_interval: Duration,
    identity: IdentityConfig,
}

impl MonitorConfig {
    /// Returns the environment key holding the collector configuration.
    #[must_use]
    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// Returns the bucket category suffix.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the minimum interval between unforced sends.
    #[must_use]
    pub const fn min_send_interval(&self) -> Duration {
        self.min_send_interval
    }

    /// Returns the identity key-chain configuration.
    #[must_use]
    pub const fn identity(&self) -> &IdentityConfig {
        &self.identity
    }

    /// Replaces the collector configuration key.
    #[must_use]
    pub fn with_config_key(mut self, key: impl Into<String>) -> Self {
        self.config_key = key.into();
        self
    }

    /// Replaces the bucket category suffix.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Replaces the minimum interval between unforced sends.
    #[must_use]
    pub const fn with_min_send_interval(mut self, interval: Duration) -> Self {
        self.min_send_interval = interval;
        self
    }

    /// Replaces the identity key-chain configuration.
    #[must_use]
    pub fn with_identity(mut self, identity: IdentityConfig) -> Self {
        self.identity = identity;
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            config_key: DEFAULT_CONFIG_KEY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            min_send_interval: DEFAULT_MIN_SEND_INTERVAL,
            identity: IdentityConfig::default(),
        }
    }
}
