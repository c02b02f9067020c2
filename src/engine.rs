// src/engine.rs
//! The public operation surface
//!
//! [`Engine`] pairs a [`Config`] with a [`RandomSource`] and exposes one
//! method per operation. It is cheap to clone and holds no mutable state, so a
//! single instance can serve any number of concurrent callers.

use std::io::Read;

use crate::aliases::non_empty;
use crate::config::{self, Config};
use crate::core::{self, Argon2Params, BcryptParams, FileDigest, KeyDetails};
use crate::enums::{DigestAlgorithm, RsaKeySize};
use crate::error::Result;
use crate::random::{random_token, OsRandom, RandomSource};

#[derive(Debug, Clone)]
pub struct Engine<S: RandomSource = OsRandom> {
    config: Config,
    source: S,
}

impl Default for Engine<OsRandom> {
    fn default() -> Self {
        Engine::new(config::load().clone())
    }
}

impl Engine<OsRandom> {
    pub fn new(config: Config) -> Self {
        Engine {
            config,
            source: OsRandom,
        }
    }
}

impl<S: RandomSource> Engine<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        Engine { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hex token of 32..=128 random bytes
    pub fn random_token(&self) -> String {
        random_token(&mut self.source.rng())
    }

    pub fn digest_payload(&self, algorithm: DigestAlgorithm, payload: &str) -> String {
        core::digest(algorithm, payload.as_bytes())
    }

    /// Same as [`Engine::digest_payload`] with the algorithm given by name
    pub fn digest_payload_named(&self, algorithm: &str, payload: &str) -> Result<String> {
        core::digest_named(algorithm, payload.as_bytes())
    }

    /// Stream digest bounded by `limits.max_file_size`
    pub fn digest_file<R: Read>(
        &self,
        algorithm: DigestAlgorithm,
        reader: R,
        declared_size: u64,
    ) -> Result<FileDigest> {
        core::digest_stream(
            algorithm,
            reader,
            declared_size,
            self.config.limits.max_file_size,
            self.config.limits.chunk_size,
        )
    }

    /// [`Engine::digest_file`] with the upload's name carried into the report
    pub fn digest_file_named<R: Read>(
        &self,
        name: &str,
        algorithm: DigestAlgorithm,
        reader: R,
        declared_size: u64,
    ) -> Result<FileDigest> {
        let mut report = self.digest_file(algorithm, reader, declared_size)?;
        report.name = Some(name.to_owned());
        Ok(report)
    }

    /// Argon2id with caller-chosen output length and memory cost
    pub fn argon2_hash(
        &self,
        payload: Option<&str>,
        length: u32,
        memory_cost: u32,
    ) -> Result<String> {
        let params = Argon2Params::with_costs(length, memory_cost, &self.config.argon2);
        core::argon2_hash(&mut self.source.rng(), payload, &params)
    }

    /// Argon2id with the configured defaults
    pub fn argon2_hash_default(&self, payload: Option<&str>) -> Result<String> {
        let params = Argon2Params::from(&self.config.argon2);
        core::argon2_hash(&mut self.source.rng(), payload, &params)
    }

    pub fn bcrypt_hash(&self, payload: Option<&str>, rounds: u32) -> Result<String> {
        core::bcrypt_hash(&mut self.source.rng(), payload, &BcryptParams { rounds })
    }

    /// Bcrypt with the configured default rounds
    pub fn bcrypt_hash_default(&self, payload: Option<&str>) -> Result<String> {
        let params = BcryptParams::from(&self.config.bcrypt);
        core::bcrypt_hash(&mut self.source.rng(), payload, &params)
    }

    pub fn verify_argon2(&self, payload: &str, encoded: &str) -> Result<bool> {
        core::verify_argon2(payload, encoded)
    }

    pub fn verify_bcrypt(&self, payload: &str, encoded: &str) -> Result<bool> {
        core::verify_bcrypt(payload, encoded)
    }

    /// RSA private key PEM; `key_size` must be 1024, 2048, 4096 or 8192
    pub fn generate_rsa_key(&self, key_size: u32, passphrase: Option<&str>) -> Result<String> {
        let size = RsaKeySize::try_from(key_size)?;
        let passphrase = non_empty(passphrase);
        core::generate_rsa(
            &mut self.source.rng(),
            size,
            passphrase.as_ref(),
            self.config.keys.pbkdf2_iterations,
        )
    }

    pub fn generate_ed25519_key(&self, passphrase: Option<&str>) -> Result<String> {
        let passphrase = non_empty(passphrase);
        core::generate_ed25519(
            &mut self.source.rng(),
            passphrase.as_ref(),
            self.config.keys.pbkdf2_iterations,
        )
    }

    pub fn derive_public_key(&self, pem: &str, passphrase: Option<&str>) -> Result<String> {
        let passphrase = non_empty(passphrase);
        core::derive_public_key(pem, passphrase.as_ref())
    }

    pub fn inspect_private_key(
        &self,
        pem: &str,
        passphrase: Option<&str>,
    ) -> Result<KeyDetails> {
        let passphrase = non_empty(passphrase);
        core::inspect_private_key(pem, passphrase.as_ref())
    }
}
