use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("upload exceeds the {} MB limit", .limit / (1024 * 1024))]
    TooLarge { limit: u64 },

    #[error("could not read request body: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads at most `limit` bytes. One extra byte is requested so an
/// oversized body is reported instead of being silently truncated.
pub fn read_body<R: Read + ?Sized>(reader: &mut R, limit: u64) -> Result<Vec<u8>, BodyError> {
    let mut body = Vec::new();
    reader.take(limit + 1).read_to_end(&mut body)?;
    if body.len() as u64 > limit {
        return Err(BodyError::TooLarge { limit });
    }
    Ok(body)
}
