//! Numeric status codes returned across the plugin boundary.
//!
//! The host transfer tool treats monitoring as best-effort: every status
//! here is advisory, none aborts the transfer. The numeric values are
//! part of the plugin contract and must not change.

use std::fmt;

/// Outcome of [`init`](crate::TransferMonitor::init).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum InitStatus {
    /// Monitoring is active; progress reports will be transmitted.
    Ok = 0,

    /// Monitoring is disabled and stays disabled for this session.
    ///
    /// Returned when the collector configuration is missing or empty, or
    /// when the transport backend could not be constructed. The caller
    /// continues the transfer without telemetry.
    Unavailable = 1,

    /// No usable host identity could be resolved.
    ///
    /// Without a hostname the session has nothing to route default
    /// batches under, so reporting is disabled. Still non-fatal to the
    /// transfer itself.
    NoHostIdentity = 2,
}

impl InitStatus {
    /// Returns the numeric status value crossing the plugin boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitor::InitStatus;
    ///
    /// assert_eq!(InitStatus::Ok.as_i32(), 0);
    /// assert_eq!(InitStatus::NoHostIdentity.as_i32(), 2);
    /// ```
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable description of the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "monitoring active",
            Self::Unavailable => "monitoring disabled or unavailable",
            Self::NoHostIdentity => "host identity unavailable",
        }
    }

    /// Returns `true` when the session will transmit progress reports.
    #[must_use]
    pub const fn monitoring_active(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of [`report_progress`](crate::TransferMonitor::report_progress).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum ReportStatus {
    /// The report was transmitted, suppressed by the rate limiter, or
    /// dropped because monitoring is disabled. All of these are success
    /// from the caller's point of view.
    Ok = 0,

    /// The collector rejected the batch; the session remains usable and
    /// later reports may succeed.
    SendFailed = 1,
}

impl ReportStatus {
    /// Returns the numeric status value crossing the plugin boundary.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable description of the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "report delivered or suppressed",
            Self::SendFailed => "collector send failed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
