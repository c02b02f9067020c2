// src/lib.rs
//! crypto-engine: stateless digest, password-hash and key-pair operations
//!
//! Features:
//! - SHA-256/384/512 and MD5 digests, one-shot or streamed under a size cap
//! - Argon2id and bcrypt password hashes
//! - RSA and Ed25519 key generation as PKCS#8 PEM, optionally passphrase-encrypted
//! - Public key derivation with a precise error for every way a key can fail to load

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod engine;
pub mod enums;
pub mod error;
#[cfg(feature = "async")]
pub mod offload;
pub mod random;

// Re-export everything users need at the crate root
pub use aliases::Passphrase;
pub use config::load as load_config;
pub use config::Config;
pub use crate::core::{Argon2Params, BcryptParams, FileDigest, KeyDetails};
pub use engine::Engine;
pub use enums::{DigestAlgorithm, KeyAlgorithm, RsaKeySize};
pub use error::{CryptoError, Result};
#[cfg(feature = "async")]
pub use offload::AsyncEngine;
pub use random::{OsRandom, RandomSource, SeededRandom};
