//! Message digests: one-shot and streaming
//!
//! [`Digester`] is the tagged accumulator behind both paths, so a streamed
//! digest is the same computation as the one-shot one.

use std::io::{ErrorKind, Read};

use md5::Md5;
use serde::Serialize;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::{debug, warn};

use crate::enums::DigestAlgorithm;
use crate::error::{CryptoError, Result};

/// Incremental digest state, one variant per algorithm
#[derive(Clone)]
pub enum Digester {
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Md5(Md5),
}

impl Digester {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => Digester::Sha256(Sha256::new()),
            DigestAlgorithm::Sha384 => Digester::Sha384(Sha384::new()),
            DigestAlgorithm::Sha512 => Digester::Sha512(Sha512::new()),
            DigestAlgorithm::Md5 => Digester::Md5(Md5::new()),
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            Digester::Sha256(_) => DigestAlgorithm::Sha256,
            Digester::Sha384(_) => DigestAlgorithm::Sha384,
            Digester::Sha512(_) => DigestAlgorithm::Sha512,
            Digester::Md5(_) => DigestAlgorithm::Md5,
        }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        match self {
            Digester::Sha256(h) => h.update(chunk),
            Digester::Sha384(h) => h.update(chunk),
            Digester::Sha512(h) => h.update(chunk),
            Digester::Md5(h) => h.update(chunk),
        }
    }

    /// Lower-case hex of the final digest
    pub fn finalize_hex(self) -> String {
        match self {
            Digester::Sha256(h) => hex::encode(h.finalize()),
            Digester::Sha384(h) => hex::encode(h.finalize()),
            Digester::Sha512(h) => hex::encode(h.finalize()),
            Digester::Md5(h) => hex::encode(h.finalize()),
        }
    }
}

/// Result of digesting a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDigest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub algorithm: DigestAlgorithm,
    pub hash: String,
    /// Bytes actually consumed from the stream
    pub size: u64,
}

/// One-shot digest of an in-memory payload
pub fn digest(algorithm: DigestAlgorithm, payload: &[u8]) -> String {
    let mut digester = Digester::new(algorithm);
    digester.update(payload);
    digester.finalize_hex()
}

/// Digest by algorithm name, rejecting anything outside the supported set
pub fn digest_named(algorithm: &str, payload: &[u8]) -> Result<String> {
    let algorithm: DigestAlgorithm = algorithm.parse()?;
    Ok(digest(algorithm, payload))
}

/// Stream `reader` through the digest in `chunk_size` reads.
///
/// `declared_size` is checked against `max_size` before the first read; the
/// running byte count is checked again after every chunk so an understated
/// declaration cannot push more than `max_size` bytes through.
pub fn digest_stream<R: Read>(
    algorithm: DigestAlgorithm,
    mut reader: R,
    declared_size: u64,
    max_size: u64,
    chunk_size: usize,
) -> Result<FileDigest> {
    if declared_size > max_size {
        warn!(declared_size, max_size, "rejecting oversized stream");
        return Err(CryptoError::PayloadTooLarge {
            size: declared_size,
            limit: max_size,
        });
    }

    debug!(%algorithm, declared_size, chunk_size, "streaming digest");

    let mut digester = Digester::new(algorithm);
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut consumed: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        consumed += n as u64;
        if consumed > max_size {
            warn!(consumed, max_size, "stream exceeded its size limit");
            return Err(CryptoError::PayloadTooLarge {
                size: consumed,
                limit: max_size,
            });
        }
        digester.update(&buf[..n]);
    }

    Ok(FileDigest {
        name: None,
        algorithm,
        hash: digester.finalize_hex(),
        size: consumed,
    })
}
