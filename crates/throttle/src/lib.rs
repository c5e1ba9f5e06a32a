#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `throttle` bounds the volume of progress telemetry independent of how
//! often the caller reports. A [`SendGate`] admits an update only when a
//! minimum real-time interval has elapsed since the last admitted update,
//! with a force override for reports that must never be skipped (the final
//! completion report in particular).
//!
//! The gate takes the current instant as an argument rather than sampling
//! the clock itself, so pacing decisions are deterministic under test.

mod gate;

pub use crate::gate::{DEFAULT_MIN_SEND_INTERVAL, SendGate};
