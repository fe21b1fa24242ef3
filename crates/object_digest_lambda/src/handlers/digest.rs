use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::object_store::{ObjectAttributes, ObjectStore};
use crate::runtime::contract::{parse_notification, NotificationRecord};
use crate::runtime::digest::hex_digest;
use crate::runtime::storage_keys::digest_artifact_key;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigestSuccessResponse {
    pub status: String,
    pub records_processed: usize,
    pub artifact_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestHandlerError {
    InvalidNotification(String),
    StorageRead {
        bucket: String,
        key: String,
        message: String,
    },
    StorageWrite {
        bucket: String,
        key: String,
        message: String,
    },
}

impl std::fmt::Display for DigestHandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNotification(message) => {
                write!(f, "invalid notification: {message}")
            }
            Self::StorageRead {
                bucket,
                key,
                message,
            } => {
                write!(f, "storage read failed for s3://{bucket}/{key}: {message}")
            }
            Self::StorageWrite {
                bucket,
                key,
                message,
            } => {
                write!(f, "storage write failed for s3://{bucket}/{key}: {message}")
            }
        }
    }
}

impl std::error::Error for DigestHandlerError {}

/// Processes one change notification: for each record, in received order,
/// streams the object, computes its SHA-256 hex digest, and writes the digest
/// back to the same bucket under `<key>.sha256`.
///
/// The first failing record aborts the invocation. Artifacts already written
/// for earlier records are not rolled back; recovery is the invoking
/// platform's redrive policy.
pub fn handle_notification(
    event: serde_json::Value,
    store: &impl ObjectStore,
) -> Result<DigestSuccessResponse, DigestHandlerError> {
    let started_at = Instant::now();

    let notification = parse_notification(event).map_err(|error| {
        log_digest_error(
            "notification_rejected",
            json!({ "error": error.message() }),
        );
        DigestHandlerError::InvalidNotification(error.message().to_string())
    })?;

    log_digest_info(
        "notification_received",
        json!({ "record_count": notification.records.len() }),
    );

    let mut artifact_keys = Vec::with_capacity(notification.records.len());
    for record in &notification.records {
        artifact_keys.push(process_record(record, store)?);
    }

    log_digest_info(
        "notification_completed",
        json!({
            "records_processed": artifact_keys.len(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    Ok(DigestSuccessResponse {
        status: "ok".to_string(),
        records_processed: artifact_keys.len(),
        artifact_keys,
    })
}

fn process_record(
    record: &NotificationRecord,
    store: &impl ObjectStore,
) -> Result<String, DigestHandlerError> {
    let bucket = record.s3.bucket.name.as_str();
    let key = record.s3.object.key.as_str();
    let started_at = Instant::now();

    let mut stream = store.read_object(bucket, key).map_err(|message| {
        log_digest_error(
            "record_read_failed",
            json!({ "bucket": bucket, "key": key, "error": message }),
        );
        DigestHandlerError::StorageRead {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        }
    })?;

    // A mid-stream failure while hashing is still a read failure of the
    // source object.
    let digest_hex = hex_digest(stream.as_mut()).map_err(|message| {
        log_digest_error(
            "record_read_failed",
            json!({ "bucket": bucket, "key": key, "error": message }),
        );
        DigestHandlerError::StorageRead {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        }
    })?;

    let artifact_key = digest_artifact_key(key);
    store
        .write_object(
            bucket,
            &artifact_key,
            digest_hex.as_bytes(),
            &ObjectAttributes::digest_artifact(),
        )
        .map_err(|message| {
            log_digest_error(
                "record_write_failed",
                json!({ "bucket": bucket, "artifact_key": artifact_key, "error": message }),
            );
            DigestHandlerError::StorageWrite {
                bucket: bucket.to_string(),
                key: artifact_key.clone(),
                message,
            }
        })?;

    log_digest_info(
        "record_completed",
        json!({
            "bucket": bucket,
            "key": key,
            "artifact_key": artifact_key,
            "digest": digest_hex,
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    Ok(artifact_key)
}

fn log_digest_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "digest_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_digest_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "digest_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
