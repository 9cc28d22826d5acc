#[cfg(test)]
mod tests {
    use gzip_stream_core::compression::{ChunkedAccumulator, ErrorKind};

    #[test]
    fn new_accumulator_is_empty() {
        let acc = ChunkedAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
        assert_eq!(acc.capacity(), 0);
        assert!(acc.into_bytes().is_empty());
    }

    #[test]
    fn ensure_capacity_grows_only_when_needed() {
        let mut acc = ChunkedAccumulator::new();
        assert!(acc.ensure_capacity(64).unwrap());
        assert_eq!(acc.capacity(), 64);

        assert!(!acc.ensure_capacity(32).unwrap(), "shrinking request must be a no-op");
        assert!(!acc.ensure_capacity(64).unwrap());
        assert_eq!(acc.capacity(), 64);
        assert_eq!(acc.len(), 0, "growth never commits bytes");
    }

    #[test]
    fn writable_tail_starts_at_logical_length() {
        let mut acc = ChunkedAccumulator::new();
        acc.ensure_capacity(16).unwrap();
        assert_eq!(acc.writable_tail().len(), 16);

        acc.writable_tail()[..5].copy_from_slice(b"hello");
        acc.commit(5).unwrap();
        assert_eq!(acc.len(), 5);
        assert_eq!(acc.writable_tail().len(), 11);
        assert_eq!(acc.as_slice(), b"hello");
    }

    #[test]
    fn growth_preserves_committed_bytes() {
        let mut acc = ChunkedAccumulator::new();
        acc.ensure_capacity(4).unwrap();
        acc.writable_tail().copy_from_slice(b"abcd");
        acc.commit(4).unwrap();

        acc.ensure_capacity(8).unwrap();
        acc.writable_tail()[..2].copy_from_slice(b"ef");
        acc.commit(2).unwrap();

        assert_eq!(acc.as_slice(), b"abcdef");
    }

    #[test]
    fn into_bytes_returns_only_committed_prefix() {
        let mut acc = ChunkedAccumulator::new();
        acc.ensure_capacity(1024).unwrap();
        acc.writable_tail()[..3].copy_from_slice(&[7, 8, 9]);
        acc.commit(3).unwrap();

        let bytes = acc.into_bytes();
        assert_eq!(bytes, vec![7, 8, 9]);
    }

    #[test]
    fn commit_past_capacity_is_rejected() {
        let mut acc = ChunkedAccumulator::new();
        acc.ensure_capacity(8).unwrap();
        acc.commit(6).unwrap();

        let err = acc.commit(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(acc.len(), 6, "failed commit must not move the logical length");
    }

    #[test]
    fn impossible_growth_reports_memory_error_and_keeps_state() {
        let mut acc = ChunkedAccumulator::new();
        acc.ensure_capacity(4).unwrap();
        acc.writable_tail().copy_from_slice(b"keep");
        acc.commit(4).unwrap();

        let err = acc.ensure_capacity(usize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MemoryError);
        assert_eq!(acc.capacity(), 4);
        assert_eq!(acc.as_slice(), b"keep");
    }
}
