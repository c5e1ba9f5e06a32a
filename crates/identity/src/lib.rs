#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `identity` resolves the identity under which a reporting session routes
//! its telemetry. Two pieces make up a [`ReportingIdentity`]:
//!
//! - an optional **job id**, read from a configurable chain of environment
//!   keys; batches from a job-scoped transfer are routed to a per-job
//!   bucket, everything else lands in a shared default bucket;
//! - a mandatory **host label**, read from a configurable chain of
//!   environment keys with a system hostname query as the last resort.
//!   Without any host label the session has no self-identity to route
//!   under, which is the only fatal condition in this crate.
//!
//! # Design
//!
//! Environment access goes through the read-only [`EnvSource`] trait so
//! resolution is deterministic under test; nothing in this crate queries
//! the process environment ad hoc. The hostname query sits behind
//! [`QueryHostname`] for the same reason. Both are resolved exactly once
//! per session.

mod env;
mod resolver;

pub use crate::env::{EnvSource, ProcessEnv, StaticEnv};
pub use crate::resolver::{
    DEFAULT_HOST_LABEL_KEYS, DEFAULT_JOB_ID_KEYS, IdentityConfig, IdentityError, QueryHostname,
    ReportingIdentity, SystemHostname, resolve_identity,
};
