//! telemetry/snapshot.rs
//!
//! Immutable telemetry snapshot of one session.
//!
//! Design notes:
//! - `ratio` is `bytes_out / bytes_in`; below 1.0 for effective compression,
//!   above 1.0 when decompressing.
//! - Throughput is measured against input bytes over elapsed wall time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub feed_calls: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub codec_steps: u64,
    pub buffer_growths: u64,
    pub windows: u64,
    pub ratio: f64,
    pub throughput_in_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            feed_calls: counters.feed_calls,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            codec_steps: counters.codec_steps,
            buffer_growths: counters.buffer_growths,
            windows: counters.windows,
            ratio,
            throughput_in_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Stage times can never add up to more than the session's lifetime.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
