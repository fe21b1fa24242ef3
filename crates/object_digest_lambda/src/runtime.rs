//! Single module boundary for core digest primitives.
//!
//! Runtime code reaches contract, digest, and storage key helpers through
//! this module rather than importing the core crate directly.

pub use object_digest_core::{contract, digest, storage_keys};
