//! AWS-oriented adapters and handlers for digest-and-store execution.
//!
//! This crate owns runtime integration details (the Lambda handler, storage
//! adapters, and structured logging) and exposes a single runtime module
//! boundary for contract, digest, and storage key primitives.
//! See `crates/object_digest_lambda/README.md` for ownership boundaries.

pub mod adapters;
pub mod handlers;
pub mod runtime;
