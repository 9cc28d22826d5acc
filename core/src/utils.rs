use crate::compression::GzipError;
use crate::constants::{MAX_CHUNK_SIZE, MAX_LEVEL, MIN_CHUNK_SIZE, MIN_LEVEL};

/// Reject compression levels outside `MIN_LEVEL..=MAX_LEVEL`.
pub fn validate_level(level: i32) -> Result<i32, GzipError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(GzipError::InvalidArgument(format!(
            "compression level {} outside {}..={}",
            level, MIN_LEVEL, MAX_LEVEL
        )))
    }
}

/// Reject chunk sizes outside `MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE`.
pub fn validate_chunk_size(size: usize) -> Result<usize, GzipError> {
    if size < MIN_CHUNK_SIZE || size > MAX_CHUNK_SIZE {
        return Err(GzipError::InvalidArgument(format!(
            "chunk size {} outside {}..={}",
            size, MIN_CHUNK_SIZE, MAX_CHUNK_SIZE
        )));
    }
    Ok(size)
}

/// Output size of the `iteration`-th fill (1-based): `chunk_size * iteration`.
pub fn fill_target(chunk_size: usize, iteration: usize) -> Result<usize, GzipError> {
    chunk_size
        .checked_mul(iteration)
        .ok_or(GzipError::Memory { requested: usize::MAX })
}
