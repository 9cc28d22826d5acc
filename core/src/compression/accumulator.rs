//! compression/accumulator.rs
//! Growable output buffer for codec output of unknown total size.
//!
//! Physical capacity (zero-initialized bytes the codec may write into) is kept
//! apart from the logical length (bytes actually committed). Growth never
//! touches committed bytes, and only the committed prefix is ever returned.
use crate::compression::types::GzipError;

#[derive(Debug, Default)]
pub struct ChunkedAccumulator {
    buf: Vec<u8>,
    len: usize,
}

impl ChunkedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical length: bytes committed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical capacity available to the codec.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Guarantee `capacity() >= target`, preserving committed bytes.
    ///
    /// Returns `Ok(true)` when the buffer grew. On allocation failure the
    /// accumulator is left exactly as it was and `GzipError::Memory` is returned.
    pub fn ensure_capacity(&mut self, target: usize) -> Result<bool, GzipError> {
        if target <= self.buf.len() {
            return Ok(false);
        }
        let additional = target - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|_| GzipError::Memory { requested: target })?;
        self.buf.resize(target, 0);
        log::trace!("accumulator grew to {} bytes ({} committed)", target, self.len);
        Ok(true)
    }

    /// Writable view from the logical length to the end of capacity.
    pub fn writable_tail(&mut self) -> &mut [u8] {
        &mut self.buf[self.len..]
    }

    /// Advance the logical length after the codec wrote `n` bytes into the tail.
    pub fn commit(&mut self, n: usize) -> Result<(), GzipError> {
        match self.len.checked_add(n) {
            Some(next) if next <= self.buf.len() => {
                self.len = next;
                Ok(())
            }
            _ => Err(GzipError::Internal(format!(
                "commit of {} bytes overruns capacity {} at length {}",
                n,
                self.buf.len(),
                self.len
            ))),
        }
    }

    /// Committed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Consume the accumulator, returning exactly the committed prefix.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.len);
        self.buf
    }
}
