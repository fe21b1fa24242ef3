use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Suffix appended to a source object key to derive its digest artifact key.
pub const DIGEST_ARTIFACT_SUFFIX: &str = ".sha256";
/// Content type declared on every digest artifact write.
pub const DIGEST_CONTENT_TYPE: &str = "text/plain";
/// Server-side encryption algorithm requested on every digest artifact write.
pub const DIGEST_ENCRYPTION_ALGORITHM: &str = "AES256";

/// One inbound storage-change notification, as delivered to the handler.
///
/// The wire shape follows the S3 event-notification envelope: a `Records`
/// array whose entries carry the bucket name and object key under a nested
/// `s3` field. Unknown sibling fields (event name, region, timestamps) are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeNotification {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Entity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parses and validates a raw notification event.
///
/// Missing or malformed fields fail the whole invocation; there is no
/// per-record isolation. Blank bucket names or object keys are rejected as
/// malformed input.
pub fn parse_notification(event: Value) -> Result<ChangeNotification, ValidationError> {
    let notification = serde_json::from_value::<ChangeNotification>(event)
        .map_err(|error| ValidationError::new(format!("Malformed notification: {error}")))?;

    if notification.records.is_empty() {
        return Err(ValidationError::new(
            "Notification must contain at least one record",
        ));
    }

    for record in &notification.records {
        if record.s3.bucket.name.trim().is_empty() {
            return Err(ValidationError::new("Record bucket name cannot be empty"));
        }
        if record.s3.object.key.trim().is_empty() {
            return Err(ValidationError::new("Record object key cannot be empty"));
        }
    }

    Ok(notification)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_notification_with_extra_event_fields() {
        let event = json!({
            "Records": [
                {
                    "eventVersion": "2.1",
                    "eventSource": "aws:s3",
                    "eventName": "ObjectCreated:Put",
                    "awsRegion": "eu-central-1",
                    "s3": {
                        "bucket": { "name": "uploads", "arn": "arn:aws:s3:::uploads" },
                        "object": { "key": "reports/2026/q1.csv", "size": 4096 }
                    }
                }
            ]
        });

        let notification = parse_notification(event).expect("notification should parse");
        assert_eq!(notification.records.len(), 1);
        assert_eq!(notification.records[0].s3.bucket.name, "uploads");
        assert_eq!(notification.records[0].s3.object.key, "reports/2026/q1.csv");
    }

    #[test]
    fn preserves_record_order() {
        let event = json!({
            "Records": [
                { "s3": { "bucket": { "name": "uploads" }, "object": { "key": "first.bin" } } },
                { "s3": { "bucket": { "name": "uploads" }, "object": { "key": "second.bin" } } }
            ]
        });

        let notification = parse_notification(event).expect("notification should parse");
        let keys: Vec<&str> = notification
            .records
            .iter()
            .map(|record| record.s3.object.key.as_str())
            .collect();
        assert_eq!(keys, vec!["first.bin", "second.bin"]);
    }

    #[test]
    fn rejects_event_without_records_field() {
        let error = parse_notification(json!({})).expect_err("event should fail");
        assert!(error.message().starts_with("Malformed notification"));
    }

    #[test]
    fn rejects_record_missing_nested_object_key() {
        let event = json!({
            "Records": [
                { "s3": { "bucket": { "name": "uploads" }, "object": {} } }
            ]
        });

        let error = parse_notification(event).expect_err("event should fail");
        assert!(error.message().starts_with("Malformed notification"));
        assert!(error.message().contains("key"));
    }

    #[test]
    fn rejects_empty_records_array() {
        let error =
            parse_notification(json!({ "Records": [] })).expect_err("event should fail");
        assert_eq!(
            error.message(),
            "Notification must contain at least one record"
        );
    }

    #[test]
    fn rejects_blank_object_key() {
        let event = json!({
            "Records": [
                { "s3": { "bucket": { "name": "uploads" }, "object": { "key": "  " } } }
            ]
        });

        let error = parse_notification(event).expect_err("event should fail");
        assert_eq!(error.message(), "Record object key cannot be empty");
    }
}
