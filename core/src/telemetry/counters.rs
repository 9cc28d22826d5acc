//! telemetry/counters.rs
//! Mutable counters updated while a session runs.
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during one session.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Non-empty `feed` calls.
    pub feed_calls: u64,
    /// Bytes handed to `feed`.
    pub bytes_in: u64,
    /// Bytes returned from `feed` and `finish`.
    pub bytes_out: u64,
    pub codec_steps: u64,
    pub buffer_growths: u64,
    /// Input windows of at most one chunk.
    pub windows: u64,
}

impl TelemetryCounters {
    /// Record one non-empty feed call.
    pub fn add_feed(&mut self, input_len: usize, output_len: usize) {
        self.feed_calls += 1;
        self.bytes_in += input_len as u64;
        self.bytes_out += output_len as u64;
    }

    /// Record output produced while finalizing.
    pub fn add_finish(&mut self, output_len: usize) {
        self.bytes_out += output_len as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.feed_calls += other.feed_calls;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.codec_steps += other.codec_steps;
        self.buffer_growths += other.buffer_growths;
        self.windows += other.windows;
    }
}
