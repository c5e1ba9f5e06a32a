//! Recording collector for deterministic tests.
//!
//! A session takes exclusive ownership of its transport, so tests keep a
//! [`SendLog`] handle that shares storage with the collector handed over.
//! Everything here is single-threaded by design, matching the session
//! model.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::batch::ParamBatch;
use crate::transport::{Collector, CollectorError, CollectorFactory};

/// One captured send.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSend {
    /// Bucket name the batch was routed to.
    pub bucket: String,
    /// Entity identifier the batch was attributed to.
    pub entity: String,
    /// The delivered batch.
    pub batch: ParamBatch,
}

/// Shared view of the sends captured by a [`RecordingCollector`].
#[derive(Clone, Debug, Default)]
pub struct SendLog {
    records: Rc<RefCell<Vec<RecordedSend>>>,
}

impl SendLog {
    /// Returns a snapshot of the captured sends in order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordedSend> {
        self.records.borrow().clone()
    }

    /// Returns the number of captured sends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Returns `true` when nothing has been sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

/// [`Collector`] that records every send instead of transmitting.
///
/// Failures can be injected: the collector rejects the next `fail_sends`
/// deliveries with [`CollectorError::Send`] before returning to normal
/// operation, mirroring a transiently unreachable collector.
#[derive(Clone, Debug, Default)]
pub struct RecordingCollector {
    log: SendLog,
    fail_sends: Rc<Cell<u32>>,
}

impl RecordingCollector {
    /// Creates a collector with a fresh, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the shared send log.
    #[must_use]
    pub fn log(&self) -> SendLog {
        self.log.clone()
    }

    /// Makes the next `count` sends fail.
    pub fn fail_next_sends(&self, count: u32) {
        self.fail_sends.set(count);
    }
}

impl Collector for RecordingCollector {
    fn send(
        &mut self,
        bucket: &str,
        entity: &str,
        batch: &ParamBatch,
    ) -> Result<(), CollectorError> {
        let remaining = self.fail_sends.get();
        if remaining > 0 {
            self.fail_sends.set(remaining - 1);
            return Err(CollectorError::Send("injected failure".to_string()));
        }

        self.log.records.borrow_mut().push(RecordedSend {
            bucket: bucket.to_string(),
            entity: entity.to_string(),
            batch: batch.clone(),
        });
        Ok(())
    }
}

/// [`CollectorFactory`] producing [`RecordingCollector`]s that share one log.
#[derive(Clone, Debug, Default)]
pub struct RecordingFactory {
    template: RecordingCollector,
    refuse_construction: bool,
}

impl RecordingFactory {
    /// Creates a factory whose collectors share a fresh log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the log shared by every constructed collector.
    #[must_use]
    pub fn log(&self) -> SendLog {
        self.template.log()
    }

    /// Makes the next `count` sends of constructed collectors fail.
    pub fn fail_next_sends(&self, count: u32) {
        self.template.fail_next_sends(count);
    }

    /// Makes `construct` fail, modelling a broken transport backend.
    #[must_use]
    pub fn refuse_construction(mut self) -> Self {
        self.refuse_construction = true;
        self
    }
}

impl CollectorFactory for RecordingFactory {
    fn construct(&self, config: &str, _debug: i32) -> Result<Box<dyn Collector>, CollectorError> {
        if self.refuse_construction {
            return Err(CollectorError::Construct(format!(
                "backend rejected configuration {config:?}"
            )));
        }

        Ok(Box::new(self.template.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_records_sends_in_order() {
        let mut collector = RecordingCollector::new();
        let log = collector.log();

        collector
            .send("Job_Transfers", "job-1", &ParamBatch::new().real64("percent", 10.0))
            .expect("send succeeds");
        collector
            .send("Job_Transfers", "job-1", &ParamBatch::new().real64("percent", 90.0))
            .expect("send succeeds");

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].batch.value_of("percent"), Some(10.0));
        assert_eq!(records[1].batch.value_of("percent"), Some(90.0));
    }

    #[test]
    fn injected_failures_are_transient() {
        let mut collector = RecordingCollector::new();
        collector.fail_next_sends(1);

        let batch = ParamBatch::new().real64("percent", 1.0);
        assert!(collector.send("Other_Transfers", "host", &batch).is_err());
        assert!(collector.send("Other_Transfers", "host", &batch).is_ok());
        assert_eq!(collector.log().len(), 1);
    }

    #[test]
    fn factory_collectors_share_the_log() {
        let factory = RecordingFactory::new();
        let log = factory.log();

        let mut collector = factory.construct("collector.conf", 0).expect("constructs");
        collector
            .send("Other_Transfers", "host", &ParamBatch::new())
            .expect("send succeeds");

        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].entity, "host");
    }

    #[test]
    fn refusing_factory_reports_construct_errors() {
        let factory = RecordingFactory::new().refuse_construction();
        let error = factory
            .construct("collector.conf", 0)
            .err()
            .expect("construction refused");
        assert!(matches!(error, CollectorError::Construct(_)));
    }
}
