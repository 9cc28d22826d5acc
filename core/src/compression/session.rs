//! compression/session.rs
//! Push-model gzip sessions: `init` once, `feed` any number of times, `finish` once.
//!
//! Design notes:
//! - Compression and decompression are two directions of one `GzipSession`,
//!   sharing the accumulator and the chunked driver loop.
//! - Codec state lives in an `Option` and is released by value, so it cannot
//!   be touched or freed again after `finish` or a failure.
//! - Any data, memory or internal error releases the codec and moves the
//!   session to `Failed` before the error is returned.
//! - Sessions are not internally synchronized; see `StreamingTransform`.
use std::time::Instant;

use crate::compression::codec::CodecState;
use crate::compression::driver::{self, DriveOutcome};
use crate::compression::types::{GzipError, SessionState, StreamingTransform};
use crate::config::StreamConfig;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

mod sealed {
    pub trait Sealed {}
}

/// Per-direction state carried by a `GzipSession`.
pub trait Direction: sealed::Sealed + Default + Send {
    const NAME: &'static str;

    /// Whether new input should still reach the codec.
    fn accepts_input(&self) -> bool {
        true
    }

    /// Fold the result of a feed run into direction state.
    fn absorb(&mut self, _outcome: &DriveOutcome, _input_len: usize) {}

    /// Account for input that was not handed to the codec.
    fn skip(&mut self, _input_len: usize) {}
}

/// Forward direction: plain bytes in, gzip member out.
#[derive(Debug, Default)]
pub struct Deflate {
    level: Option<i32>,
}

/// Inverse direction: gzip member in, plain bytes out.
#[derive(Debug, Default)]
pub struct Inflate {
    stream_end: bool,
    trailing: u64,
}

impl sealed::Sealed for Deflate {}
impl sealed::Sealed for Inflate {}

impl Direction for Deflate {
    const NAME: &'static str = "compression";
}

impl Direction for Inflate {
    const NAME: &'static str = "decompression";

    fn accepts_input(&self) -> bool {
        !self.stream_end
    }

    fn absorb(&mut self, outcome: &DriveOutcome, input_len: usize) {
        if outcome.stream_end {
            self.stream_end = true;
            self.skip(input_len - outcome.consumed);
        }
    }

    fn skip(&mut self, input_len: usize) {
        if input_len > 0 {
            log::warn!("ignoring {} bytes after the end of the gzip member", input_len);
            self.trailing += input_len as u64;
        }
    }
}

pub struct GzipSession<D: Direction> {
    state: SessionState,
    codec: Option<CodecState>,
    config: StreamConfig,
    direction: D,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

pub type CompressionSession = GzipSession<Deflate>;
pub type DecompressionSession = GzipSession<Inflate>;

impl<D: Direction> Default for GzipSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Direction> GzipSession<D> {
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            state: SessionState::Created,
            codec: None,
            config,
            direction: D::default(),
            counters: TelemetryCounters::default(),
            timer: TelemetryTimer::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(&self.counters, &self.timer)
    }

    /// Push the next slice of the stream.
    ///
    /// Returns only the output produced by this call. Empty input is a no-op.
    pub fn feed(&mut self, data: &[u8]) -> Result<Vec<u8>, GzipError> {
        self.ensure_state("feed", SessionState::Active)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }
        if !self.direction.accepts_input() {
            self.direction.skip(data.len());
            self.counters.add_feed(data.len(), 0);
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let outcome = self.run(|codec, chunk_size, counters| {
            driver::drive_feed(codec, data, chunk_size, counters)
        })?;
        self.direction.absorb(&outcome, data.len());
        self.timer.add_stage_time(Stage::Feed, started.elapsed());
        self.counters.add_feed(data.len(), outcome.output.len());

        Ok(outcome.output)
    }

    fn init_with(&mut self, init: impl FnOnce() -> Result<CodecState, GzipError>) -> Result<(), GzipError> {
        self.ensure_state("init", SessionState::Created)?;
        let started = Instant::now();
        match init() {
            Ok(codec) => {
                self.codec = Some(codec);
                self.state = SessionState::Active;
                self.timer.add_stage_time(Stage::Init, started.elapsed());
                log::debug!("{} session initialized (chunk size {})", D::NAME, self.config.chunk_size());
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Run a driver closure against the codec, failing the session on error.
    fn run<F>(&mut self, drive: F) -> Result<DriveOutcome, GzipError>
    where
        F: FnOnce(&mut CodecState, usize, &mut TelemetryCounters) -> Result<DriveOutcome, GzipError>,
    {
        let chunk_size = self.config.chunk_size();
        let result = match self.codec.as_mut() {
            Some(codec) => drive(codec, chunk_size, &mut self.counters),
            None => Err(GzipError::Internal("active session has no codec state".into())),
        };
        result.map_err(|err| self.fail(err))
    }

    /// Release the codec and mark the session finished.
    fn close(&mut self, stage_started: Instant) {
        if let Some(codec) = self.codec.take() {
            codec.release();
        }
        self.state = SessionState::Finished;
        self.timer.add_stage_time(Stage::Finish, stage_started.elapsed());
        self.timer.finish();
        log::debug!(
            "{} session finished: {} bytes in, {} bytes out",
            D::NAME,
            self.counters.bytes_in,
            self.counters.bytes_out
        );
    }

    fn ensure_state(&self, op: &'static str, expected: SessionState) -> Result<(), GzipError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GzipError::InvalidState { op, state: self.state })
        }
    }

    /// Release any codec state, move to `Failed`, and hand the error back.
    fn fail(&mut self, err: GzipError) -> GzipError {
        if let Some(codec) = self.codec.take() {
            codec.release();
        }
        self.state = SessionState::Failed;
        self.timer.finish();
        log::error!("{} session failed: {}", D::NAME, err);
        err
    }
}

impl GzipSession<Deflate> {
    /// Allocate the deflate state at `level` (`-1` = codec default, `0..=9`).
    pub fn init(&mut self, level: i32) -> Result<(), GzipError> {
        self.init_with(|| CodecState::init_compress(level))?;
        self.direction.level = Some(level);
        Ok(())
    }

    /// Level fixed by a successful `init`.
    pub fn level(&self) -> Option<i32> {
        self.direction.level
    }

    /// Flush everything the codec still holds, write the gzip footer, and release the codec.
    pub fn finish(&mut self) -> Result<Vec<u8>, GzipError> {
        self.ensure_state("finish", SessionState::Active)?;
        let started = Instant::now();
        let outcome = self.run(driver::drive_finish)?;
        if !outcome.stream_end {
            return Err(self.fail(GzipError::Internal("deflate did not terminate the stream".into())));
        }
        self.counters.add_finish(outcome.output.len());
        self.close(started);
        Ok(outcome.output)
    }
}

impl GzipSession<Inflate> {
    /// Allocate the inflate state.
    pub fn init(&mut self) -> Result<(), GzipError> {
        self.init_with(CodecState::init_decompress)
    }

    /// Release the codec.
    ///
    /// Succeeds even if the gzip footer was never reached; check
    /// `is_stream_end` first to detect truncated input.
    pub fn finish(&mut self) -> Result<(), GzipError> {
        self.ensure_state("finish", SessionState::Active)?;
        let started = Instant::now();
        if !self.direction.stream_end {
            log::warn!("decompression session closed before the end of the gzip member");
        }
        self.close(started);
        Ok(())
    }

    pub fn end(&mut self) -> Result<(), GzipError> {
        self.finish()
    }

    /// The gzip footer has been consumed and verified.
    pub fn is_stream_end(&self) -> bool {
        self.direction.stream_end
    }

    /// Bytes supplied after the end of the gzip member.
    pub fn trailing_bytes(&self) -> u64 {
        self.direction.trailing
    }
}

impl StreamingTransform for GzipSession<Deflate> {
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>, GzipError> {
        self.feed(input)
    }

    fn complete(&mut self) -> Result<Vec<u8>, GzipError> {
        self.finish()
    }

    fn state(&self) -> SessionState {
        self.state
    }

    fn is_stream_end(&self) -> bool {
        self.state == SessionState::Finished
    }
}

impl StreamingTransform for GzipSession<Inflate> {
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>, GzipError> {
        self.feed(input)
    }

    fn complete(&mut self) -> Result<Vec<u8>, GzipError> {
        self.finish()?;
        Ok(Vec::new())
    }

    fn state(&self) -> SessionState {
        self.state
    }

    fn is_stream_end(&self) -> bool {
        self.direction.stream_end
    }
}

impl<D: Direction> Drop for GzipSession<D> {
    fn drop(&mut self) {
        if let Some(codec) = self.codec.take() {
            log::debug!("{} session dropped while {}", D::NAME, self.state);
            codec.release();
        }
    }
}
