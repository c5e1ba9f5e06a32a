use std::collections::HashMap;

/// Read-only lookup of environment-style configuration keys.
///
/// Implementations return the raw value for a key or `None` when the key
/// is absent. Empty values are not filtered here; callers decide whether
/// an empty string counts as present.
pub trait EnvSource {
    /// Returns the value for `key`, or `None` when absent or not UTF-8.
    fn get(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// [`EnvSource`] backed by a fixed key/value map.
///
/// Useful for embedding a session in a host tool that carries its own
/// configuration, and for deterministic tests.
///
/// # Examples
///
/// ```
/// use identity::{EnvSource, StaticEnv};
///
/// let env = StaticEnv::from_iter([("HOSTNAME", "worker-3")]);
/// assert_eq!(env.get("HOSTNAME").as_deref(), Some("worker-3"));
/// assert_eq!(env.get("HOST"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticEnv {
    values: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty source where every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a key, returning the source for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
