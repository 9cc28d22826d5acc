//! config.rs
//! Per-session tuning.
//!
//! The chunk size only changes how many codec steps and buffer growths happen;
//! it never changes what a stream decodes to.

use crate::compression::GzipError;
use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::utils::validate_chunk_size;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    chunk_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

impl StreamConfig {
    pub fn new(chunk_size: usize) -> Result<Self, GzipError> {
        Ok(Self { chunk_size: validate_chunk_size(chunk_size)? })
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self, GzipError> {
        self.chunk_size = validate_chunk_size(chunk_size)?;
        Ok(self)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
