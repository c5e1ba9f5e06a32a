#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `endpoint` classifies the source and destination locators of a file
//! transfer and resolves the network address reported alongside progress
//! telemetry. An endpoint is either a path on the local filesystem or a
//! remote location introduced by the `root://` scheme; remote endpoints
//! carry a bare hostname that is resolved once per reporting session.
//!
//! # Design
//!
//! Classification is a pure function of the scheme prefix and never fails:
//! a malformed remote endpoint simply yields an empty hostname, which
//! callers treat as unresolvable. Resolution goes through the
//! [`ResolveHost`] trait so sessions can inject a deterministic resolver in
//! tests while production code uses [`SystemResolver`], a thin adapter over
//! the operating system's name service. Resolution failures degrade to
//! [`UNRESOLVED_ADDR`]; address telemetry is best-effort and must never
//! abort a transfer.

mod classify;
mod resolve;

pub use crate::classify::{Endpoint, REMOTE_SCHEME};
pub use crate::resolve::{ResolveHost, SystemResolver, UNRESOLVED_ADDR, encode_addr, resolve_addr};
