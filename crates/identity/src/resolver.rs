use thiserror::Error;

use crate::env::EnvSource;

/// Default environment keys consulted for a job identifier, in order.
pub const DEFAULT_JOB_ID_KEYS: [&str; 2] = ["XFERMON_JOB_ID", "GRID_JOB_ID"];

/// Default environment keys consulted for the host label, in order.
pub const DEFAULT_HOST_LABEL_KEYS: [&str; 2] = ["HOSTNAME", "HOST"];

/// Key chains used when resolving a [`ReportingIdentity`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdentityConfig {
    job_id_keys: Vec<String>,
    host_label_keys: Vec<String>,
}

impl IdentityConfig {
    /// Creates a configuration with explicit key chains.
    #[must_use]
    pub fn new(
        job_id_keys: impl IntoIterator<Item = impl Into<String>>,
        host_label_keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            job_id_keys: job_id_keys.into_iter().map(Into::into).collect(),
            host_label_keys: host_label_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the job identifier key chain.
    #[must_use]
    pub fn job_id_keys(&self) -> &[String] {
        &self.job_id_keys
    }

    /// Returns the host label key chain.
    #[must_use]
    pub fn host_label_keys(&self) -> &[String] {
        &self.host_label_keys
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_JOB_ID_KEYS, DEFAULT_HOST_LABEL_KEYS)
    }
}

/// Hostname collaborator queried when no environment key yields a label.
pub trait QueryHostname {
    /// Returns the machine's hostname, or `None` when unavailable.
    fn hostname(&self) -> Option<String>;
}

/// [`QueryHostname`] implementation backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHostname;

impl QueryHostname for SystemHostname {
    fn hostname(&self) -> Option<String> {
        hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .filter(|name| !name.is_empty())
    }
}

/// Errors raised while resolving a reporting identity.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IdentityError {
    /// Neither the environment nor the system query produced a hostname.
    ///
    /// Reporting cannot proceed without a self-identity to route default
    /// batches under, so this aborts session initialization.
    #[error("no usable host identity from the environment or the system hostname query")]
    HostUnavailable,
}

/// Identity under which a session routes its telemetry.
///
/// Resolved exactly once at session initialization and immutable
/// thereafter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportingIdentity {
    job_id: Option<String>,
    host_label: String,
}

impl ReportingIdentity {
    /// Returns the job identifier, when the transfer runs inside a job.
    #[must_use]
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    /// Returns the host label used for default-bucket routing.
    #[must_use]
    pub fn host_label(&self) -> &str {
        &self.host_label
    }
}

/// Returns the first non-empty value among `keys` in `env`.
fn first_non_empty(env: &dyn EnvSource, keys: &[String]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env.get(key))
        .find(|value| !value.is_empty())
}

/// Resolves the reporting identity from the injected collaborators.
///
/// The job id is the first non-empty value along the configured key chain,
/// or `None` when the transfer is not job-scoped. The host label prefers
/// the environment chain and falls back to the system hostname query;
/// exhausting every option is [`IdentityError::HostUnavailable`].
pub fn resolve_identity(
    config: &IdentityConfig,
    env: &dyn EnvSource,
    query: &dyn QueryHostname,
) -> Result<ReportingIdentity, IdentityError> {
    let job_id = first_non_empty(env, config.job_id_keys());

    let host_label = match first_non_empty(env, config.host_label_keys()) {
        Some(label) => label,
        None => {
            tracing::debug!(
                keys = ?config.host_label_keys(),
                "no host label in the environment; querying the system hostname"
            );
            query.hostname().ok_or(IdentityError::HostUnavailable)?
        }
    };

    Ok(ReportingIdentity { job_id, host_label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    struct NoHostname;

    impl QueryHostname for NoHostname {
        fn hostname(&self) -> Option<String> {
            None
        }
    }

    struct FixedHostname(&'static str);

    impl QueryHostname for FixedHostname {
        fn hostname(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn primary_job_key_wins() {
        let env = StaticEnv::new()
            .with("XFERMON_JOB_ID", "job-17")
            .with("GRID_JOB_ID", "grid-4")
            .with("HOSTNAME", "worker");
        let identity = resolve_identity(&IdentityConfig::default(), &env, &NoHostname)
            .expect("identity resolves");
        assert_eq!(identity.job_id(), Some("job-17"));
    }

    #[test]
    fn secondary_job_key_is_the_fallback() {
        let env = StaticEnv::new()
            .with("GRID_JOB_ID", "grid-4")
            .with("HOSTNAME", "worker");
        let identity = resolve_identity(&IdentityConfig::default(), &env, &NoHostname)
            .expect("identity resolves");
        assert_eq!(identity.job_id(), Some("grid-4"));
    }

    #[test]
    fn empty_job_value_counts_as_absent() {
        let env = StaticEnv::new()
            .with("XFERMON_JOB_ID", "")
            .with("HOSTNAME", "worker");
        let identity = resolve_identity(&IdentityConfig::default(), &env, &NoHostname)
            .expect("identity resolves");
        assert_eq!(identity.job_id(), None);
    }

    #[test]
    fn host_label_prefers_the_environment() {
        let env = StaticEnv::new().with("HOSTNAME", "from-env");
        let identity = resolve_identity(&IdentityConfig::default(), &env, &FixedHostname("queried"))
            .expect("identity resolves");
        assert_eq!(identity.host_label(), "from-env");
    }

    #[test]
    fn host_label_falls_back_to_the_system_query() {
        let env = StaticEnv::new();
        let identity = resolve_identity(&IdentityConfig::default(), &env, &FixedHostname("queried"))
            .expect("identity resolves");
        assert_eq!(identity.host_label(), "queried");
    }

    #[test]
    fn missing_host_identity_is_fatal() {
        let env = StaticEnv::new();
        let error = resolve_identity(&IdentityConfig::default(), &env, &NoHostname)
            .expect_err("no identity available");
        assert_eq!(error, IdentityError::HostUnavailable);
    }

    #[test]
    fn custom_key_chains_are_honoured() {
        let config = IdentityConfig::new(["MY_JOB"], ["MY_HOST"]);
        let env = StaticEnv::new().with("MY_JOB", "j1").with("MY_HOST", "h1");
        let identity = resolve_identity(&config, &env, &NoHostname).expect("identity resolves");
        assert_eq!(identity.job_id(), Some("j1"));
        assert_eq!(identity.host_label(), "h1");
    }

    #[test]
    fn system_hostname_returns_a_non_empty_name() {
        if let Some(name) = SystemHostname.hostname() {
            assert!(!name.is_empty());
        }
    }
}
