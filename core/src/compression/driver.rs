//! compression/driver.rs
//! Chunked driver loop shared by both session directions.
//!
//! Input is split into windows of at most `chunk_size` bytes. Each window is
//! stepped through the codec into successive `chunk_size` output fills; the
//! accumulator grows to `chunk_size * iteration` before every fill. A window is
//! done once a step leaves output space unused and its input is consumed.
use crate::compression::accumulator::ChunkedAccumulator;
use crate::compression::codec::CodecState;
use crate::compression::types::{CodecStatus, FlushMode, GzipError};
use crate::telemetry::TelemetryCounters;
use crate::utils::fill_target;

/// Result of one driver run.
#[derive(Debug)]
pub struct DriveOutcome {
    /// Output produced during this run only.
    pub output: Vec<u8>,
    /// Input bytes the codec consumed.
    pub consumed: usize,
    /// Codec reported the end of the gzip member.
    pub stream_end: bool,
}

struct Fill<'a> {
    codec: &'a mut CodecState,
    acc: ChunkedAccumulator,
    chunk_size: usize,
    iteration: usize,
    counters: &'a mut TelemetryCounters,
}

/// Push `input` through the codec with `NoFlush`.
///
/// Stops early if the codec reports the end of the stream; `consumed` then
/// tells how much of `input` belonged to the stream.
pub fn drive_feed(
    codec: &mut CodecState,
    input: &[u8],
    chunk_size: usize,
    counters: &mut TelemetryCounters,
) -> Result<DriveOutcome, GzipError> {
    let mut fill = Fill::new(codec, chunk_size, counters);
    let mut consumed = 0;
    let mut stream_end = false;

    for window in input.chunks(chunk_size) {
        fill.counters.windows += 1;
        let (used, ended) = fill.drain(window, FlushMode::NoFlush)?;
        consumed += used;
        if ended {
            stream_end = true;
            break;
        }
    }

    Ok(DriveOutcome { output: fill.acc.into_bytes(), consumed, stream_end })
}

/// Drive the codec with `Finish` until it reports the end of the stream.
pub fn drive_finish(
    codec: &mut CodecState,
    chunk_size: usize,
    counters: &mut TelemetryCounters,
) -> Result<DriveOutcome, GzipError> {
    let mut fill = Fill::new(codec, chunk_size, counters);
    let (_, stream_end) = fill.drain(&[], FlushMode::Finish)?;

    Ok(DriveOutcome { output: fill.acc.into_bytes(), consumed: 0, stream_end })
}

impl<'a> Fill<'a> {
    fn new(codec: &'a mut CodecState, chunk_size: usize, counters: &'a mut TelemetryCounters) -> Self {
        Self {
            codec,
            acc: ChunkedAccumulator::new(),
            chunk_size,
            iteration: 1,
            counters,
        }
    }

    /// Step one window until its output has drained.
    /// Returns `(bytes consumed, stream ended)`.
    fn drain(&mut self, window: &[u8], mode: FlushMode) -> Result<(usize, bool), GzipError> {
        let mut pos = 0;
        loop {
            // committed <= chunk_size * (iteration - 1), so the tail always holds a full fill
            let target = fill_target(self.chunk_size, self.iteration)?;
            if self.acc.ensure_capacity(target)? {
                self.counters.buffer_growths += 1;
            }
            self.iteration += 1;

            let tail = self.acc.writable_tail();
            let limit = tail.len().min(self.chunk_size);
            let step = self.codec.step(&window[pos..], &mut tail[..limit], mode)?;
            self.counters.codec_steps += 1;
            pos += step.consumed;
            self.acc.commit(step.produced)?;
            log::trace!(
                "{} step: consumed={} produced={} status={:?}",
                self.codec.name(),
                step.consumed,
                step.produced,
                step.status
            );

            match step.status {
                CodecStatus::StreamEnd => return Ok((pos, true)),
                CodecStatus::NeedMoreOutput => continue,
                CodecStatus::NeedMoreInput => {
                    if mode == FlushMode::NoFlush && pos >= window.len() {
                        return Ok((pos, false));
                    }
                    if step.consumed == 0 && step.produced == 0 {
                        return Err(GzipError::Internal(format!(
                            "{} codec made no progress ({} input bytes pending, mode {:?})",
                            self.codec.name(),
                            window.len() - pos,
                            mode
                        )));
                    }
                }
            }
        }
    }
}
