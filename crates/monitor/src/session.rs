//! The reporting session and its caller-facing plugin surface.

use std::time::Instant;

use collector::{Collector, CollectorFactory, ParamBatch};
use endpoint::{Endpoint, ResolveHost, SystemResolver, UNRESOLVED_ADDR, resolve_addr};
use identity::{
    EnvSource, IdentityError, ProcessEnv, QueryHostname, ReportingIdentity, SystemHostname,
    resolve_identity,
};
use throttle::SendGate;

use crate::config::MonitorConfig;
use crate::info::{LibraryInfo, library_info};
use crate::status::{InitStatus, ReportStatus};

/// External collaborators consumed by a session.
///
/// Injected at construction so every environment lookup, name resolution
/// and transport interaction is deterministic under test. Production
/// callers use [`Collaborators::system`] and only supply the transport
/// factory.
pub struct Collaborators {
    /// Read-only environment lookup.
    pub env: Box<dyn EnvSource>,
    /// Hostname to address resolution.
    pub resolver: Box<dyn ResolveHost>,
    /// System hostname query, the identity fallback of last resort.
    pub host_query: Box<dyn QueryHostname>,
    /// Constructor for the collector transport.
    pub factory: Box<dyn CollectorFactory>,
}

impl Collaborators {
    /// Creates collaborators backed by the process environment and the
    /// operating system, with the supplied transport factory.
    #[must_use]
    pub fn system(factory: Box<dyn CollectorFactory>) -> Self {
        Self {
            env: Box::new(ProcessEnv),
            resolver: Box::new(SystemResolver),
            host_query: Box::new(SystemHostname),
            factory,
        }
    }
}

/// Lifecycle state of a reporting session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// Created, `init` not called yet.
    Uninitialized,
    /// `init` in progress.
    Initializing,
    /// Initialized with an active transport; accepting progress reports.
    Ready,
    /// `deinit` in progress.
    ShuttingDown,
    /// Torn down, or initialization failed. Terminal: every further call
    /// is a no-op.
    Closed,
}

/// Caller-facing monitoring plugin contract.
///
/// Mirrors the abstract interface the host transfer tool loads the
/// reporter through. Every method is best-effort: no call aborts the
/// transfer, failures surface as numeric statuses.
pub trait TransferMonitor {
    /// Initializes the session for a transfer from `source` to
    /// `destination`. `debug` is forwarded to the transport.
    fn init(&mut self, source: &str, destination: &str, debug: i32) -> InitStatus;

    /// Releases the transport. Idempotent; also invoked on drop.
    fn deinit(&mut self);

    /// Returns static identification strings. No side effects.
    fn library_info(&self) -> LibraryInfo;

    /// Reports transfer progress, subject to rate limiting.
    fn report_progress(
        &mut self,
        moved_bytes: i64,
        total_size: i64,
        percent: f32,
        force: bool,
    ) -> ReportStatus;
}

/// A progress-reporting session for one transfer.
///
/// Owns the collector transport exclusively; endpoint classification,
/// addresses and identity are resolved exactly once during `init` and
/// never re-resolved. One session serves one transfer and assumes a
/// single-threaded caller: `report_progress` mutates the rate-limiter
/// stamp and may block for the duration of a synchronous send.
pub struct ProgressMonitor {
    config: MonitorConfig,
    collaborators: Collaborators,
    state: SessionState,
    collector: Option<Box<dyn Collector>>,
    identity: Option<ReportingIdentity>,
    source_remote: bool,
    destination_remote: bool,
    source_addr: f64,
    destination_addr: f64,
    gate: SendGate,
    started: Option<Instant>,
}

impl ProgressMonitor {
    /// Creates an uninitialized session.
    #[must_use]
    pub fn new(config: MonitorConfig, collaborators: Collaborators) -> Self {
        let gate = SendGate::new(config.min_send_interval());
        Self {
            config,
            collaborators,
            state: SessionState::Uninitialized,
            collector: None,
            identity: None,
            source_remote: false,
            destination_remote: false,
            source_addr: UNRESOLVED_ADDR,
            destination_addr: UNRESOLVED_ADDR,
            gate,
            started: None,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` when progress reports will be transmitted.
    #[must_use]
    pub const fn monitoring_active(&self) -> bool {
        matches!(self.state, SessionState::Ready) && self.collector.is_some()
    }

    fn init_inner(&mut self, source: &str, destination: &str, debug: i32) -> InitStatus {
        if self.state != SessionState::Uninitialized {
            // Double-init guard: a live session stays live, a closed one
            // stays closed.
            return if self.state == SessionState::Ready {
                InitStatus::Ok
            } else {
                InitStatus::Unavailable
            };
        }

        self.state = SessionState::Initializing;
        self.started = Some(Instant::now());

        let config_value = self
            .collaborators
            .env
            .get(self.config.config_key())
            .filter(|value| !value.is_empty());
        let Some(config_value) = config_value else {
            tracing::warn!(
                key = self.config.config_key(),
                "monitoring disabled: no collector configuration in the environment"
            );
            self.state = SessionState::Closed;
            return InitStatus::Unavailable;
        };

        let collector = match self.collaborators.factory.construct(&config_value, debug) {
            Ok(collector) => collector,
            Err(error) => {
                tracing::warn!(%error, "monitoring disabled: collector construction failed");
                self.state = SessionState::Closed;
                return InitStatus::Unavailable;
            }
        };

        let identity = match resolve_identity(
            self.config.identity(),
            self.collaborators.env.as_ref(),
            self.collaborators.host_query.as_ref(),
        ) {
            Ok(identity) => identity,
            Err(IdentityError::HostUnavailable) => {
                tracing::warn!("monitoring disabled: host identity unavailable");
                // The collector constructed above is dropped here and
                // released before the session reports failure.
                self.state = SessionState::Closed;
                return InitStatus::NoHostIdentity;
            }
        };

        self.classify_and_resolve(source, destination, &identity);

        self.identity = Some(identity);
        self.collector = Some(collector);
        self.gate = SendGate::new(self.config.min_send_interval());
        self.state = SessionState::Ready;
        InitStatus::Ok
    }

    /// Classifies both endpoints and resolves the address telemetry.
    ///
    /// The branches run in sequence: the non-remote side receives the
    /// local machine's address, and when both sides are remote the
    /// destination branch overwrites the source address with the local
    /// one. Both sides local leaves both addresses unresolved. This
    /// ordering is part of the reported-address contract and must not be
    /// reordered.
    fn classify_and_resolve(
        &mut self,
        source: &str,
        destination: &str,
        identity: &ReportingIdentity,
    ) {
        let src = Endpoint::classify(source);
        let dst = Endpoint::classify(destination);
        self.source_remote = src.is_remote();
        self.destination_remote = dst.is_remote();
        self.source_addr = UNRESOLVED_ADDR;
        self.destination_addr = UNRESOLVED_ADDR;

        if !self.source_remote && !self.destination_remote {
            return;
        }

        let resolver = self.collaborators.resolver.as_ref();
        let local_addr = resolve_addr(resolver, identity.host_label());

        if let Endpoint::Remote { host } = src {
            self.source_addr = if host.is_empty() {
                UNRESOLVED_ADDR
            } else {
                resolve_addr(resolver, host)
            };
            self.destination_addr = local_addr;
        }

        if let Endpoint::Remote { host } = dst {
            self.destination_addr = if host.is_empty() {
                UNRESOLVED_ADDR
            } else {
                resolve_addr(resolver, host)
            };
            self.source_addr = local_addr;
        }
    }

    fn report_inner(
        &mut self,
        moved_bytes: i64,
        total_size: i64,
        percent: f32,
        force: bool,
    ) -> ReportStatus {
        if self.state != SessionState::Ready || self.collector.is_none() {
            // Monitoring disabled: silently succeed so the caller never
            // treats the absence of telemetry as a transfer problem.
            return ReportStatus::Ok;
        }

        if !self.gate.should_send(Instant::now(), force) {
            return ReportStatus::Ok;
        }

        let elapsed_ms = self
            .started
            .map_or(0.0, |started| started.elapsed().as_secs_f64() * 1000.0);
        let moved = moved_bytes as f64;
        // Throughput in the collector's Mb/s-equivalent unit; zero elapsed
        // time would otherwise poison the batch with inf or NaN.
        let speed = if elapsed_ms > 0.0 {
            moved / elapsed_ms / 1000.0
        } else {
            0.0
        };
        let read_bytes = if self.source_remote { moved } else { 0.0 };
        let written_bytes = if self.destination_remote { moved } else { 0.0 };

        let batch = ParamBatch::with_capacity(9)
            .real64("total_size", total_size as f64)
            .real64("moved_bytes", moved)
            .real64("read_bytes", read_bytes)
            .real64("written_bytes", written_bytes)
            .real64("speed", speed)
            .real64("elapsed_time", elapsed_ms)
            .real64("percent", f64::from(percent))
            .real64("src_IP", self.source_addr)
            .real64("dst_IP", self.destination_addr);

        let Some(identity) = self.identity.as_ref() else {
            return ReportStatus::Ok;
        };
        let (bucket, entity) = match identity.job_id() {
            Some(job_id) => (format!("Job_{}", self.config.category()), job_id),
            None => (
                format!("Other_{}", self.config.category()),
                identity.host_label(),
            ),
        };

        let Some(collector) = self.collector.as_mut() else {
            return ReportStatus::Ok;
        };
        match collector.send(&bucket, entity, &batch) {
            Ok(()) => ReportStatus::Ok,
            Err(error) => {
                tracing::warn!(%error, bucket, "progress report not delivered");
                ReportStatus::SendFailed
            }
        }
    }

    fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }

        self.state = SessionState::ShuttingDown;
        // Releases the transport exactly once; `collector` is already
        // `None` when monitoring never became active.
        self.collector = None;
        self.state = SessionState::Closed;
    }
}

impl TransferMonitor for ProgressMonitor {
    fn init(&mut self, source: &str, destination: &str, debug: i32) -> InitStatus {
        self.init_inner(source, destination, debug)
    }

    fn deinit(&mut self) {
        self.close();
    }

    fn library_info(&self) -> LibraryInfo {
        library_info()
    }

    fn report_progress(
        &mut self,
        moved_bytes: i64,
        total_size: i64,
        percent: f32,
        force: bool,
    ) -> ReportStatus {
        self.report_inner(moved_bytes, total_size, percent, force)
    }
}

impl Drop for ProgressMonitor {
    fn drop(&mut self) {
        // Abandoned sessions must not leak the transport handle.
        self.close();
    }
}
