//! Shared digest-and-store domain primitives.
//!
//! This crate owns the change-notification contract, artifact key derivation,
//! and streaming digest computation. It intentionally excludes AWS SDK and
//! Lambda runtime concerns.
//! See `crates/object_digest_core/README.md` for ownership boundaries.

pub mod contract;
pub mod digest;
pub mod storage_keys;
