use sha2::{Digest, Sha256};

/// Fixed read size for consuming an object stream.
///
/// Chunked consumption bounds peak memory to one chunk regardless of object
/// size.
pub const READ_CHUNK_SIZE: usize = 1024;

/// A finite, forward-only, single-pass byte source.
///
/// Implementations yield at most `chunk_size` bytes per call and `Ok(None)`
/// once the stream is exhausted. An empty chunk is treated as exhaustion.
pub trait ObjectStream {
    fn next_chunk(&mut self, chunk_size: usize) -> Result<Option<Vec<u8>>, String>;
}

/// Consumes the stream in [`READ_CHUNK_SIZE`] chunks through a SHA-256
/// accumulator and renders the finalized digest as 64 lowercase hex chars.
pub fn hex_digest(stream: &mut dyn ObjectStream) -> Result<String, String> {
    hex_digest_with_chunk_size(stream, READ_CHUNK_SIZE)
}

pub fn hex_digest_with_chunk_size(
    stream: &mut dyn ObjectStream,
    chunk_size: usize,
) -> Result<String, String> {
    if chunk_size == 0 {
        return Err("Digest chunk size must be a positive integer".to_string());
    }

    let mut hasher = Sha256::new();
    while let Some(chunk) = stream.next_chunk(chunk_size)? {
        if chunk.is_empty() {
            break;
        }
        hasher.update(&chunk);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
