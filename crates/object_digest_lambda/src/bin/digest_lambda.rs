use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ServerSideEncryption;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use object_digest_lambda::adapters::object_store::{ObjectAttributes, ObjectStore};
use object_digest_lambda::handlers::digest::{handle_notification, DigestSuccessResponse};
use object_digest_lambda::runtime::digest::ObjectStream;

struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

/// Forward-only view over an S3 response body.
///
/// The SDK yields network-sized frames; buffering lets `next_chunk` honor the
/// at-most-`chunk_size` contract without holding more than one frame beyond
/// the requested size.
struct S3ReadStream {
    body: ByteStream,
    buffered: Vec<u8>,
}

impl ObjectStream for S3ReadStream {
    fn next_chunk(&mut self, chunk_size: usize) -> Result<Option<Vec<u8>>, String> {
        while self.buffered.len() < chunk_size {
            let frame = tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(self.body.try_next())
            })
            .map_err(|error| format!("failed to read object bytes from s3: {error}"))?;

            match frame {
                Some(bytes) => self.buffered.extend_from_slice(&bytes),
                None => break,
            }
        }

        if self.buffered.is_empty() {
            return Ok(None);
        }

        let take = chunk_size.min(self.buffered.len());
        Ok(Some(self.buffered.drain(..take).collect()))
    }
}

impl ObjectStore for S3ObjectStore {
    fn read_object(&self, bucket: &str, key: &str) -> Result<Box<dyn ObjectStream>, String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
            })
        })
        .map_err(|error| format!("failed to read object from s3: {error}"))?;

        Ok(Box::new(S3ReadStream {
            body: output.body,
            buffered: Vec::new(),
        }))
    }

    fn write_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        attributes: &ObjectAttributes,
    ) -> Result<(), String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let content_type = attributes.content_type.clone();
        let encryption = ServerSideEncryption::from(attributes.server_side_encryption.as_str());
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .content_type(content_type)
                    .server_side_encryption(encryption)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<serde_json::Value>,
) -> Result<DigestSuccessResponse, Error> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let object_store = S3ObjectStore {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    handle_notification(event.payload, &object_store)
        .map_err(|error| Error::from(error.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
