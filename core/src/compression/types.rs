//! compression/types.rs
//! Session states, codec step results, the error taxonomy and the
//! `StreamingTransform` capability shared by both session directions.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::codes;

/// Lifecycle of a session.
///
/// `Created → Active → Finished`, with any step able to move to `Failed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Created,
    Active,
    Finished,
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Created  => "created",
            SessionState::Active   => "active",
            SessionState::Finished => "finished",
            SessionState::Failed   => "failed",
        };
        f.write_str(name)
    }
}

/// Flush discipline handed to the codec on each step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlushMode {
    /// Codec may hold back buffered output.
    NoFlush,
    /// Codec must emit everything and terminate the stream.
    Finish,
}

/// Non-error outcome of a single codec step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecStatus {
    /// The output slice was filled completely; more output may be pending.
    NeedMoreOutput,
    /// Output space remains, so everything pending for the given input has drained.
    NeedMoreInput,
    /// The stream terminated (gzip footer written or consumed).
    StreamEnd,
}

/// Bookkeeping returned by one codec step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub consumed: usize,
    pub produced: usize,
    pub status: CodecStatus,
}

/// Coarse error classes exposed to host adapters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidState,
    InvalidArgument,
    DataError,
    MemoryError,
    InternalError,
    Io,
}

#[derive(Debug, Error)]
pub enum GzipError {
    /// Operation called out of sequence.
    #[error("{op} is not allowed in the {state} state")]
    InvalidState { op: &'static str, state: SessionState },

    /// Bad level, chunk size or similar caller-supplied value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed or corrupt compressed input.
    #[error("data error: {0}")]
    Data(String),

    /// Allocation failure while growing an output buffer.
    #[error("out of memory: could not grow output buffer to {requested} bytes")]
    Memory { requested: usize },

    /// Codec reported an inconsistent stream state.
    #[error("internal codec fault: {0}")]
    Internal(String),

    /// Reader failure in the stream helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GzipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GzipError::InvalidState { .. } => ErrorKind::InvalidState,
            GzipError::InvalidArgument(_)  => ErrorKind::InvalidArgument,
            GzipError::Data(_)             => ErrorKind::DataError,
            GzipError::Memory { .. }       => ErrorKind::MemoryError,
            GzipError::Internal(_)         => ErrorKind::InternalError,
            GzipError::Io(_)               => ErrorKind::Io,
        }
    }

    /// True when the caller misused the API (fix the call sequence),
    /// false when the data or the system failed (discard the stream).
    pub fn is_misuse(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidState | ErrorKind::InvalidArgument)
    }

    /// zlib-compatible integer code for host adapters.
    pub fn code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidState
            | ErrorKind::InvalidArgument
            | ErrorKind::InternalError => codes::STREAM_ERROR,
            ErrorKind::DataError       => codes::DATA_ERROR,
            ErrorKind::MemoryError     => codes::MEM_ERROR,
            ErrorKind::Io              => codes::ERRNO,
        }
    }
}

/// One push-model transform: feed slices in order, then complete once.
///
/// Implementations are not internally synchronized. A single session must be
/// driven by one caller at a time; independent sessions may run on separate
/// threads.
pub trait StreamingTransform: Send {
    /// Push the next input slice and return only the output produced by this call.
    fn transform(&mut self, input: &[u8]) -> Result<Vec<u8>, GzipError>;

    /// Finalize the stream, releasing codec resources.
    fn complete(&mut self) -> Result<Vec<u8>, GzipError>;

    fn state(&self) -> SessionState;

    /// Whether the gzip member has been fully written or fully consumed.
    fn is_stream_end(&self) -> bool;
}
