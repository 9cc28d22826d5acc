//! compression/mod.rs
//! Chunked streaming gzip engine.
//!
//! Notes:
//! - One logical stream per session; output order always matches feed order.
//! - The codec is driven one fixed-size chunk at a time into a growable buffer.
//! - Codec state is released exactly once, on `finish` or on failure.

pub mod types;
pub mod codec;
pub mod accumulator;
pub mod driver;
pub mod session;
pub mod stream;

pub use types::*;
pub use accumulator::ChunkedAccumulator;
pub use codec::CodecState;
pub use session::{CompressionSession, DecompressionSession, Deflate, Direction, GzipSession, Inflate};
pub use stream::*;
