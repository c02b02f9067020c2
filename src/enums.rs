// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets callers choose from:
//! digest algorithms, RSA modulus sizes and key families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Supported message digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Md5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
            DigestAlgorithm::Md5 => "md5",
        }
    }

    /// Raw digest size in bytes
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
            DigestAlgorithm::Md5 => 16,
        }
    }

    /// Length of the lower-case hex rendering
    pub fn hex_len(self) -> usize {
        self.output_len() * 2
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigestAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(s.to_owned()))
    }
}

/// RSA modulus sizes the key generator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum RsaKeySize {
    Rsa1024,
    #[default]
    Rsa2048,
    Rsa4096,
    Rsa8192,
}

impl RsaKeySize {
    pub const ALL: [RsaKeySize; 4] = [
        RsaKeySize::Rsa1024,
        RsaKeySize::Rsa2048,
        RsaKeySize::Rsa4096,
        RsaKeySize::Rsa8192,
    ];

    pub fn bits(self) -> usize {
        match self {
            RsaKeySize::Rsa1024 => 1024,
            RsaKeySize::Rsa2048 => 2048,
            RsaKeySize::Rsa4096 => 4096,
            RsaKeySize::Rsa8192 => 8192,
        }
    }
}

impl TryFrom<u32> for RsaKeySize {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        RsaKeySize::ALL
            .into_iter()
            .find(|size| size.bits() == bits as usize)
            .ok_or_else(|| CryptoError::out_of_range("key_size", bits, "1024, 2048, 4096, 8192"))
    }
}

impl From<RsaKeySize> for u32 {
    fn from(size: RsaKeySize) -> Self {
        size.bits() as u32
    }
}

/// Key family recovered from a parsed private key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KeyAlgorithm {
    Rsa { bits: usize },
    Ed25519,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa { bits } => write!(f, "RSA-{bits}"),
            KeyAlgorithm::Ed25519 => f.write_str("Ed25519"),
        }
    }
}
