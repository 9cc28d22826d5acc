//! compression/codec.rs
//! Gzip codec adapter over flate2's in-memory deflate/inflate objects.
//!
//! Design notes:
//! - Framing is gzip (RFC 1952) with a 32 KiB window in both directions.
//! - Consumed/produced counts come from `total_in`/`total_out` deltas.
//! - Data, dictionary and stream-state faults surface as `GzipError`, never as a status.
//! - `release` consumes the state, so a session cannot release it twice.
use flate2::{
    Compress, Compression, Decompress, DecompressError, FlushCompress, FlushDecompress, Status,
};

use crate::compression::types::{CodecStatus, FlushMode, GzipError, StepOutcome};
use crate::constants::{CODEC_DEFAULT_LEVEL, DEFAULT_LEVEL, GZIP_WINDOW_BITS};
use crate::utils::validate_level;

/// Opaque codec state owned by exactly one session.
pub enum CodecState {
    Deflate(Compress),
    Inflate(Decompress),
}

impl CodecState {
    /// Configure a gzip-framed deflate stream at `level` (`-1` = codec default).
    pub fn init_compress(level: i32) -> Result<Self, GzipError> {
        let level = validate_level(level)?;
        let compression = if level == DEFAULT_LEVEL {
            Compression::new(CODEC_DEFAULT_LEVEL)
        } else {
            Compression::new(level as u32)
        };
        Ok(CodecState::Deflate(Compress::new_gzip(compression, GZIP_WINDOW_BITS)))
    }

    /// Configure a gzip-aware inflate stream.
    pub fn init_decompress() -> Result<Self, GzipError> {
        Ok(CodecState::Inflate(Decompress::new_gzip(GZIP_WINDOW_BITS)))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodecState::Deflate(_) => "deflate",
            CodecState::Inflate(_) => "inflate",
        }
    }

    /// Run the codec once over `input`, writing at most `output.len()` bytes.
    pub fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        mode: FlushMode,
    ) -> Result<StepOutcome, GzipError> {
        let (consumed, produced, status) = match self {
            CodecState::Deflate(engine) => {
                let flush = match mode {
                    FlushMode::NoFlush => FlushCompress::None,
                    FlushMode::Finish  => FlushCompress::Finish,
                };
                let before_in = engine.total_in();
                let before_out = engine.total_out();
                let status = engine
                    .compress(input, output, flush)
                    .map_err(|e| GzipError::Internal(format!("deflate stream state clobbered: {}", e)))?;
                let consumed = (engine.total_in() - before_in) as usize;
                let produced = (engine.total_out() - before_out) as usize;
                (consumed, produced, status)
            }
            CodecState::Inflate(engine) => {
                let flush = match mode {
                    FlushMode::NoFlush => FlushDecompress::None,
                    FlushMode::Finish  => FlushDecompress::Finish,
                };
                let before_in = engine.total_in();
                let before_out = engine.total_out();
                let status = engine
                    .decompress(input, output, flush)
                    .map_err(inflate_error)?;
                let consumed = (engine.total_in() - before_in) as usize;
                let produced = (engine.total_out() - before_out) as usize;
                (consumed, produced, status)
            }
        };

        Ok(StepOutcome {
            consumed,
            produced,
            status: classify(status, produced, output.len()),
        })
    }

    /// Free the codec resources.
    pub fn release(self) {
        log::trace!("releasing {} codec state", self.name());
        drop(self);
    }
}

fn classify(status: Status, produced: usize, capacity: usize) -> CodecStatus {
    match status {
        Status::StreamEnd => CodecStatus::StreamEnd,
        Status::Ok | Status::BufError if capacity > 0 && produced == capacity => {
            CodecStatus::NeedMoreOutput
        }
        Status::Ok | Status::BufError => CodecStatus::NeedMoreInput,
    }
}

fn inflate_error(err: DecompressError) -> GzipError {
    if err.needs_dictionary().is_some() {
        return GzipError::Data("stream requires a preset dictionary".into());
    }
    GzipError::Data(err.message().unwrap_or("invalid gzip data").to_string())
}
