#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use gzip_stream_core::{
        compression::{compress, DecompressionSession, ErrorKind, GzipError, SessionState},
        config::StreamConfig,
        constants::codes,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn active() -> DecompressionSession {
        let mut session = DecompressionSession::new();
        session.init().expect("init");
        session
    }

    fn sample(len: usize) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet = b"gzip stream engine ";
        (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
    }

    #[test]
    fn init_moves_to_active() {
        let mut session = DecompressionSession::new();
        assert_eq!(session.state(), SessionState::Created);
        session.init().unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert!(!session.is_stream_end());
    }

    #[test]
    fn decodes_whole_member_in_one_feed() {
        let input = sample(70_000);
        let gz = compress(&input, 6).unwrap();

        let mut session = active();
        let out = session.feed(&gz).unwrap();
        assert_eq!(out, input);
        assert!(session.is_stream_end());
        assert_eq!(session.trailing_bytes(), 0);
        session.finish().unwrap();
        assert_eq!(session.state(), SessionState::Finished);
    }

    #[test]
    fn decodes_byte_at_a_time() {
        let input = sample(3_000);
        let gz = compress(&input, 9).unwrap();

        let mut session = active();
        let mut out = Vec::new();
        for b in &gz {
            out.extend_from_slice(&session.feed(std::slice::from_ref(b)).unwrap());
        }
        assert_eq!(out, input);
        assert!(session.is_stream_end());
    }

    #[test]
    fn random_bytes_yield_data_error_within_bounded_calls() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(1952);
        let mut garbage = vec![0u8; 4096];
        rng.fill(&mut garbage[..]);
        garbage[0] = 0x00; // never the gzip magic

        let mut session = active();
        let mut failure = None;
        for (i, piece) in garbage.chunks(7).enumerate() {
            match session.feed(piece) {
                Ok(_) => continue,
                Err(e) => {
                    failure = Some((i, e));
                    break;
                }
            }
        }

        let (calls, err) = failure.expect("garbage must be rejected");
        assert!(calls < 4, "rejected only after {} calls", calls);
        assert_eq!(err.kind(), ErrorKind::DataError);
        assert_eq!(err.code(), codes::DATA_ERROR);
        assert!(!err.is_misuse());
        assert_eq!(session.state(), SessionState::Failed);
    }

    #[test]
    fn corrupt_footer_is_a_data_error() {
        let input = sample(10_000);
        let mut gz = compress(&input, 6).unwrap();
        let n = gz.len();
        gz[n - 8] ^= 0xff; // crc32

        let mut session = active();
        let err = session.feed(&gz).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataError);
        assert_eq!(session.state(), SessionState::Failed);
        assert!(!session.is_stream_end());
    }

    #[test]
    fn failed_session_rejects_further_calls() {
        let mut session = active();
        session.feed(b"\x00\x00not gzip at all").unwrap_err();

        let err = session.feed(b"more").unwrap_err();
        assert!(matches!(err, GzipError::InvalidState { op: "feed", state: SessionState::Failed }));
        let err = session.finish().unwrap_err();
        assert!(matches!(err, GzipError::InvalidState { op: "finish", state: SessionState::Failed }));
    }

    #[test]
    fn truncated_stream_can_still_be_closed() {
        init_logger();
        let input = sample(20_000);
        let gz = compress(&input, 6).unwrap();

        let mut session = active();
        let partial = session.feed(&gz[..gz.len() - 4]).unwrap();
        assert!(!session.is_stream_end());
        assert!(input.starts_with(&partial));

        session.end().unwrap();
        assert_eq!(session.state(), SessionState::Finished);
    }

    #[test]
    fn finish_twice_is_invalid_state() {
        let mut session = active();
        session.finish().unwrap();
        let err = session.finish().unwrap_err();
        assert!(matches!(err, GzipError::InvalidState { op: "finish", state: SessionState::Finished }));
        assert_eq!(err.code(), codes::STREAM_ERROR);
    }

    #[test]
    fn bytes_after_member_are_counted_not_decoded() {
        let input = sample(5_000);
        let mut gz = compress(&input, 6).unwrap();
        gz.extend_from_slice(b"junk");

        let mut session = active();
        assert_eq!(session.feed(&gz).unwrap(), input);
        assert!(session.is_stream_end());
        assert_eq!(session.trailing_bytes(), 4);

        assert!(session.feed(b"more junk").unwrap().is_empty());
        assert_eq!(session.trailing_bytes(), 13);
        session.finish().unwrap();
    }

    #[test]
    fn small_chunk_size_decodes_identically() {
        let input = sample(40_000);
        let gz = compress(&input, 6).unwrap();

        let mut session = DecompressionSession::with_config(StreamConfig::new(16).unwrap());
        session.init().unwrap();
        assert_eq!(session.feed(&gz).unwrap(), input);
        assert!(session.is_stream_end());
    }

    #[test]
    fn highly_compressed_input_expands_across_many_fills() {
        let input = vec![0u8; 1 << 20];
        let gz = compress(&input, 9).unwrap();

        let mut session = active();
        let out = session.feed(&gz).unwrap();
        assert_eq!(out.len(), input.len());
        assert!(out.iter().all(|&b| b == 0));
        assert!(session.counters().codec_steps >= (1 << 20) / (16 * 1024));
    }
}
