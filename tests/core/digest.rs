use std::fs;
use std::io::{self, Cursor, Read};

use crypto_engine::core::digest;
use crypto_engine::{CryptoError, DigestAlgorithm};
use tempfile::tempdir;

use crate::common::test_engine;

const MIB_512: u64 = 512 * 1024 * 1024;

/// Hands out the data in reads of the given sizes, cycling through them
struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    sizes: Vec<usize>,
    next: usize,
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let want = self.sizes[self.next % self.sizes.len()];
        self.next += 1;
        let n = want.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Fails the test if anything reads from it
struct Untouchable;

impl Read for Untouchable {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        panic!("stream must not be read");
    }
}

#[test]
fn test_empty_payload_vectors() {
    let engine = test_engine();
    assert_eq!(
        engine.digest_payload(DigestAlgorithm::Sha256, ""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        engine.digest_payload(DigestAlgorithm::Md5, ""),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn test_hex_lengths_per_algorithm() {
    let engine = test_engine();
    let expected = [
        (DigestAlgorithm::Sha256, 64),
        (DigestAlgorithm::Sha384, 96),
        (DigestAlgorithm::Sha512, 128),
        (DigestAlgorithm::Md5, 32),
    ];
    for (algo, len) in expected {
        assert_eq!(engine.digest_payload(algo, "The quick brown fox").len(), len);
    }
}

#[test]
fn test_unknown_algorithm_name() {
    let engine = test_engine();
    let err = engine.digest_payload_named("sha3-256", "x").unwrap_err();
    assert!(matches!(err, CryptoError::UnsupportedAlgorithm(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_streaming_matches_one_shot_for_any_split() {
    let engine = test_engine();
    let data: Vec<u8> = (0..100_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let splits: [&[usize]; 4] = [&[1], &[7, 4096, 3], &[65_536], &[99_999, 1]];

    for algo in DigestAlgorithm::ALL {
        let expected = digest(algo, &data);
        for sizes in splits {
            let reader = ChunkedReader {
                data: data.clone(),
                pos: 0,
                sizes: sizes.to_vec(),
                next: 0,
            };
            let report = engine
                .digest_file(algo, reader, data.len() as u64)
                .unwrap();
            assert_eq!(report.hash, expected, "{algo} split {sizes:?}");
            assert_eq!(report.size, data.len() as u64);
        }
    }
}

#[test]
fn test_declared_size_over_limit_is_rejected_before_reading() {
    let engine = test_engine();
    let err = engine
        .digest_file(DigestAlgorithm::Sha256, Untouchable, MIB_512 + 1)
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::PayloadTooLarge { size, limit } if size == MIB_512 + 1 && limit == MIB_512
    ));
}

#[test]
fn test_declared_size_at_limit_is_accepted() {
    let engine = test_engine();
    let report = engine
        .digest_file(DigestAlgorithm::Md5, Cursor::new(Vec::new()), MIB_512)
        .unwrap();
    assert_eq!(report.hash, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(report.size, 0);
}

#[test]
fn test_file_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fox.txt");
    fs::write(&path, b"The quick brown fox jumps over the lazy dog").unwrap();

    let engine = test_engine();
    let file = fs::File::open(&path).unwrap();
    let size = file.metadata().unwrap().len();
    let report = engine
        .digest_file_named("fox.txt", DigestAlgorithm::Md5, file, size)
        .unwrap();

    assert_eq!(report.name.as_deref(), Some("fox.txt"));
    assert_eq!(report.hash, "9e107d9d372bb6826bd81d3542a419d6");
    assert_eq!(report.size, 43);
}
