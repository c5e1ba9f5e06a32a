use thiserror::Error;

use crate::batch::ParamBatch;

/// Errors surfaced by the collector transport.
///
/// The payloads are plain strings because the transport is a black box:
/// sessions only log the failure and choose a degradation path, they never
/// match on transport internals.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CollectorError {
    /// The configuration handed to the factory was rejected.
    #[error("collector configuration rejected: {0}")]
    Config(String),
    /// The transport could not be constructed.
    #[error("collector construction failed: {0}")]
    Construct(String),
    /// A batch could not be delivered.
    #[error("collector send failed: {0}")]
    Send(String),
}

/// Synchronous transport to the monitoring collector.
///
/// `send` blocks for the duration of the network exchange; there is no
/// internal timeout. A failed send leaves the transport usable for
/// subsequent batches. Implementations release their resources on drop.
pub trait Collector {
    /// Delivers `batch` under `bucket`, attributed to `entity`.
    fn send(&mut self, bucket: &str, entity: &str, batch: &ParamBatch)
    -> Result<(), CollectorError>;
}

/// Construction contract for collector transports.
///
/// The host tool supplies the factory; `config` is the opaque
/// configuration value (typically a path or URL read from the
/// environment) and `debug` is the caller's diagnostic level, forwarded
/// so transports can raise their own verbosity.
pub trait CollectorFactory {
    /// Constructs a transport from the opaque configuration string.
    fn construct(&self, config: &str, debug: i32) -> Result<Box<dyn Collector>, CollectorError>;
}
