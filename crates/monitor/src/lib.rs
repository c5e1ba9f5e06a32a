#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `monitor` is the reporting engine of oc-xfermon: it owns the lifecycle
//! of one progress-telemetry session per transfer. On initialization it
//! classifies the transfer endpoints, resolves address and identity
//! telemetry exactly once, and constructs the collector transport; during
//! the transfer it rate-limits progress updates and sends them as ordered
//! batches of typed parameters; on teardown it releases the transport
//! exactly once.
//!
//! # Design
//!
//! Monitoring is best-effort and never load-bearing. Every failure during
//! initialization degrades to "monitoring disabled" and every failure
//! during steady-state reporting is swallowed with a non-zero status and
//! a diagnostic; nothing in this crate aborts the host process. The
//! caller drives the session through the [`TransferMonitor`] trait, which
//! mirrors the abstract plugin contract of the host transfer tool.
//!
//! ```
//! use collector::RecordingFactory;
//! use identity::StaticEnv;
//! use monitor::{Collaborators, MonitorConfig, ProgressMonitor, TransferMonitor};
//!
//! let factory = RecordingFactory::new();
//! let log = factory.log();
//! let mut collaborators = Collaborators::system(Box::new(factory));
//! collaborators.env = Box::new(StaticEnv::from_iter([
//!     ("XFERMON_CONFIG", "collector.conf"),
//!     ("HOSTNAME", "worker-1"),
//! ]));
//!
//! let mut session = ProgressMonitor::new(MonitorConfig::default(), collaborators);
//! assert_eq!(session.init("root://a.example/f", "/tmp/f", 0).as_i32(), 0);
//! assert_eq!(session.report_progress(500_000, 1_000_000, 50.0, true).as_i32(), 0);
//! assert_eq!(log.len(), 1);
//! ```

mod config;
mod info;
mod session;
mod status;

pub use crate::config::{DEFAULT_CATEGORY, DEFAULT_CONFIG_KEY, MonitorConfig};
pub use crate::info::{LibraryInfo, library_info};
pub use crate::session::{Collaborators, ProgressMonitor, SessionState, TransferMonitor};
pub use crate::status::{InitStatus, ReportStatus};
