//! compression/stream.rs
//! Reader-driven and one-shot helpers built on the push-model sessions.
use std::io::{self, Read};

use crate::compression::session::{CompressionSession, DecompressionSession};
use crate::compression::types::{GzipError, StreamingTransform};
use crate::config::StreamConfig;

/// Summary: Compress data read from `reader` in `chunk_size` blocks, yielding gzip output.
/// - Finalizes the session once at EOF.
/// - Empty outputs are skipped.
pub fn compress_stream<R: Read>(
    reader: R,
    level: i32,
    config: StreamConfig,
) -> Result<impl Iterator<Item = Result<Vec<u8>, GzipError>>, GzipError> {
    let mut session = CompressionSession::with_config(config);
    session.init(level)?;
    Ok(drive_reader(reader, config.chunk_size(), Box::new(session)))
}

/// Summary: Decompress a gzip member read from `reader` in `chunk_size` blocks.
/// - EOF before the gzip footer yields a `Data` error.
pub fn decompress_stream<R: Read>(
    reader: R,
    config: StreamConfig,
) -> Result<impl Iterator<Item = Result<Vec<u8>, GzipError>>, GzipError> {
    let mut session = DecompressionSession::with_config(config);
    session.init()?;
    Ok(drive_reader(reader, config.chunk_size(), Box::new(session)))
}

/// Compress `data` into a complete gzip member.
pub fn compress(data: &[u8], level: i32) -> Result<Vec<u8>, GzipError> {
    let mut session = CompressionSession::new();
    session.init(level)?;
    let mut out = session.feed(data)?;
    out.extend_from_slice(&session.finish()?);
    Ok(out)
}

/// Decompress one complete gzip member. Truncated input is a `Data` error.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, GzipError> {
    let mut session = DecompressionSession::new();
    session.init()?;
    let out = session.feed(data)?;
    let complete = session.is_stream_end();
    session.finish()?;
    if !complete {
        return Err(GzipError::Data("truncated gzip stream".into()));
    }
    Ok(out)
}

fn drive_reader<R: Read>(
    mut reader: R,
    chunk_size: usize,
    mut session: Box<dyn StreamingTransform>,
) -> impl Iterator<Item = Result<Vec<u8>, GzipError>> {
    let mut buf = vec![0u8; chunk_size];
    let mut done = false;

    std::iter::from_fn(move || {
        while !done {
            let n = match reader.read(&mut buf) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    done = true;
                    return Some(Err(GzipError::Io(e)));
                }
            };

            let result = if n == 0 {
                done = true;
                session.complete().and_then(|out| {
                    if session.is_stream_end() {
                        Ok(out)
                    } else {
                        Err(GzipError::Data("truncated gzip stream".into()))
                    }
                })
            } else {
                session.transform(&buf[..n])
            };

            match result {
                Ok(out) if out.is_empty() => continue,
                Ok(out) => return Some(Ok(out)),
                Err(e) => {
                    done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    })
}
