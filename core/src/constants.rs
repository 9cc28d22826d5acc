//! constants.rs
//! Shared tuning parameters and gzip framing constants.

/// Default per-fill output transfer size (16 KiB).
/// Each codec step is handed at most this many bytes of output space and at
/// most this many bytes of input.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Smallest accepted chunk size. Large enough to hold a gzip header in one fill.
pub const MIN_CHUNK_SIZE: usize = 16;

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Compression levels understood by the codec.
/// `-1` selects the codec default.
pub const DEFAULT_LEVEL: i32 = -1;
pub const MIN_LEVEL: i32 = -1;
pub const MAX_LEVEL: i32 = 9;

/// Level the codec uses when `DEFAULT_LEVEL` is requested.
pub const CODEC_DEFAULT_LEVEL: u32 = 6;

/// LZ77 history window (32 KiB) as base-2 log.
pub const GZIP_WINDOW_BITS: u8 = 15;

/// RFC 1952 member magic ("\x1f\x8b").
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Length of the gzip footer (CRC32 + ISIZE, both little-endian).
pub const GZIP_FOOTER_LEN: usize = 8;

/// zlib-compatible integer codes handed to host adapters.
pub mod codes {
    pub const ERRNO: i32 = -1;
    pub const STREAM_ERROR: i32 = -2;
    pub const DATA_ERROR: i32 = -3;
    pub const MEM_ERROR: i32 = -4;
}
