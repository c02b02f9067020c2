// src/random.rs
//! Secure randomness seam and the random token primitive
//!
//! Every salt, fallback payload, token and key draws from a [`RandomSource`].
//! Production code uses [`OsRandom`]; tests can plug in [`SeededRandom`].

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use crate::consts::{TOKEN_MAX_BYTES, TOKEN_MIN_BYTES};

/// Hands out a cryptographically secure RNG per operation
pub trait RandomSource: Send + Sync {
    type Rng: RngCore + CryptoRng;

    fn rng(&self) -> Self::Rng;
}

/// Operating-system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    type Rng = OsRng;

    fn rng(&self) -> OsRng {
        OsRng
    }
}

/// Deterministic ChaCha stream: every call to `rng()` replays the same sequence.
///
/// Only meant for tests and reproducible fixtures. An `Engine` built on it
/// returns the same token on every call and reuses the same salts, IVs and
/// key material across operations.
#[derive(Debug, Clone, Copy)]
pub struct SeededRandom {
    pub seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { seed }
    }
}

impl RandomSource for SeededRandom {
    type Rng = StdRng;

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// `len` random bytes
pub fn random_bytes<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// Random byte string whose length is drawn uniformly from 32..=128
pub fn random_payload<R: RngCore + CryptoRng>(rng: &mut R) -> Vec<u8> {
    let len = rng.gen_range(TOKEN_MIN_BYTES..=TOKEN_MAX_BYTES);
    random_bytes(rng, len)
}

/// Hex token of 64..=256 characters
pub fn random_token<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    hex::encode(random_payload(rng))
}
