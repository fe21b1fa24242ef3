use crate::runtime::contract::{DIGEST_CONTENT_TYPE, DIGEST_ENCRYPTION_ALGORITHM};
use crate::runtime::digest::ObjectStream;

/// Metadata attributes declared on an object write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAttributes {
    pub content_type: String,
    pub server_side_encryption: String,
}

impl ObjectAttributes {
    /// Attributes every digest artifact is written with.
    pub fn digest_artifact() -> Self {
        Self {
            content_type: DIGEST_CONTENT_TYPE.to_string(),
            server_side_encryption: DIGEST_ENCRYPTION_ALGORITHM.to_string(),
        }
    }
}

/// Injection seam over the external object-storage backend.
///
/// The handler depends only on these two operations: a streamed single-pass
/// read by key, and a write by key with body bytes plus metadata attributes.
pub trait ObjectStore {
    fn read_object(&self, bucket: &str, key: &str) -> Result<Box<dyn ObjectStream>, String>;

    fn write_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        attributes: &ObjectAttributes,
    ) -> Result<(), String>;
}
