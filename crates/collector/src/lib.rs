#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `collector` defines the contract between a reporting session and the
//! remote monitoring collector. The collector itself is a black box
//! supplied by the host tool; this crate only fixes the shapes that cross
//! the boundary:
//!
//! - [`ParamBatch`]: an ordered batch of named, semantically typed
//!   double-precision parameters, constructed fresh for every send;
//! - [`Collector`]: the synchronous send interface, addressed by a bucket
//!   name and an entity identifier;
//! - [`CollectorFactory`]: the construction contract, taking an opaque
//!   configuration string so transport details never leak into sessions;
//! - [`CollectorError`]: the failure taxonomy shared by both traits.
//!
//! Transport failures are explicit results, never panics; sessions decide
//! how to degrade.
//!
//! With the `test-support` feature the crate additionally ships a
//! recording collector whose captured sends can be inspected after the
//! session has taken ownership of the transport.

mod batch;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
mod testing;
mod transport;

pub use crate::batch::{Param, ParamBatch, ParamType};
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use crate::testing::{RecordedSend, RecordingCollector, RecordingFactory, SendLog};
pub use crate::transport::{Collector, CollectorError, CollectorFactory};
