//! gzip-stream-core
//!
//! Pure Rust push-model gzip compressor/decompressor.
//! Callers `init` a session once, `feed` it slices in order, and `finish` it once.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod utils;

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress, decompress, compress_stream, decompress_stream,
        CompressionSession, DecompressionSession, ErrorKind, GzipError, SessionState, StreamingTransform,
    };
    pub use crate::config::StreamConfig;
    pub use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_LEVEL};
    pub use crate::telemetry::TelemetrySnapshot;
}
