// src/offload.rs
//! Async wrappers that move slow operations onto tokio's blocking pool
//!
//! RSA generation at 4096/8192 bits and multi-hundred-MiB digests take long
//! enough to stall an async worker; everything here runs on
//! `spawn_blocking` and hands the result back.

use std::io::Read;
use std::sync::Arc;

use tokio::task;

use crate::core::FileDigest;
use crate::engine::Engine;
use crate::enums::DigestAlgorithm;
use crate::error::{CryptoError, Result};
use crate::random::{OsRandom, RandomSource};

pub struct AsyncEngine<S: RandomSource = OsRandom> {
    inner: Arc<Engine<S>>,
}

impl<S: RandomSource> Clone for AsyncEngine<S> {
    fn clone(&self) -> Self {
        AsyncEngine {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RandomSource + 'static> AsyncEngine<S> {
    pub fn new(engine: Engine<S>) -> Self {
        AsyncEngine {
            inner: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.inner
    }

    async fn run<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Engine<S>) -> Result<T> + Send + 'static,
    {
        let engine = Arc::clone(&self.inner);
        task::spawn_blocking(move || job(&*engine))
            .await
            .map_err(|e| CryptoError::Worker(e.to_string()))?
    }

    pub async fn generate_rsa_key(
        &self,
        key_size: u32,
        passphrase: Option<String>,
    ) -> Result<String> {
        self.run(move |engine| engine.generate_rsa_key(key_size, passphrase.as_deref()))
            .await
    }

    pub async fn generate_ed25519_key(&self, passphrase: Option<String>) -> Result<String> {
        self.run(move |engine| engine.generate_ed25519_key(passphrase.as_deref()))
            .await
    }

    pub async fn digest_file<R>(
        &self,
        algorithm: DigestAlgorithm,
        reader: R,
        declared_size: u64,
    ) -> Result<FileDigest>
    where
        R: Read + Send + 'static,
    {
        self.run(move |engine| engine.digest_file(algorithm, reader, declared_size))
            .await
    }

    pub async fn argon2_hash(
        &self,
        payload: Option<String>,
        length: u32,
        memory_cost: u32,
    ) -> Result<String> {
        self.run(move |engine| engine.argon2_hash(payload.as_deref(), length, memory_cost))
            .await
    }

    pub async fn bcrypt_hash(&self, payload: Option<String>, rounds: u32) -> Result<String> {
        self.run(move |engine| engine.bcrypt_hash(payload.as_deref(), rounds))
            .await
    }

    pub async fn derive_public_key(
        &self,
        pem: String,
        passphrase: Option<String>,
    ) -> Result<String> {
        self.run(move |engine| engine.derive_public_key(&pem, passphrase.as_deref()))
            .await
    }
}
