// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Payload too large: {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("Invalid {parameter}: {value} (allowed: {allowed})")]
    InvalidParameterRange {
        parameter: &'static str,
        value: u64,
        allowed: String,
    },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("A passphrase was supplied but the private key is not encrypted")]
    UnexpectedPassphrase,

    #[error("Could not decrypt private key: missing or wrong passphrase")]
    DecryptionFailed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Worker task failed: {0}")]
    Worker(String),
}

impl CryptoError {
    /// `true` for the failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CryptoError::UnsupportedAlgorithm(_)
                | CryptoError::PayloadTooLarge { .. }
                | CryptoError::InvalidParameterRange { .. }
                | CryptoError::InvalidKeyFormat(_)
                | CryptoError::UnexpectedPassphrase
                | CryptoError::DecryptionFailed
        )
    }

    pub(crate) fn out_of_range(
        parameter: &'static str,
        value: impl Into<u64>,
        allowed: impl Into<String>,
    ) -> Self {
        CryptoError::InvalidParameterRange {
            parameter,
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}

impl From<toml::de::Error> for CryptoError {
    fn from(err: toml::de::Error) -> Self {
        CryptoError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
