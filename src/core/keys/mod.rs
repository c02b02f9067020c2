//! Asymmetric key pairs: generation, PKCS#8 encoding, inspection
//!
//! Private keys travel as PKCS#8 PEM (`PRIVATE KEY`, or `ENCRYPTED PRIVATE KEY`
//! when a passphrase was given); public keys as SubjectPublicKeyInfo PEM.

mod encode;
mod generate;
mod inspect;

pub use generate::{generate_ed25519, generate_rsa};
pub use inspect::{derive_public_key, inspect_private_key, load_private_key, KeyDetails};

use ed25519_dalek::SigningKey;
use pkcs8::{EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::enums::KeyAlgorithm;
use crate::error::{CryptoError, Result};

/// A parsed private key of one of the supported families
pub enum PrivateKey {
    Rsa(RsaPrivateKey),
    Ed25519(SigningKey),
}

impl PrivateKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKey::Rsa(key) => KeyAlgorithm::Rsa {
                bits: key.size() * 8,
            },
            PrivateKey::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// SubjectPublicKeyInfo PEM of the public half
    pub fn public_key_pem(&self) -> Result<String> {
        let pem = match self {
            PrivateKey::Rsa(key) => key.to_public_key().to_public_key_pem(LineEnding::LF),
            PrivateKey::Ed25519(key) => key.verifying_key().to_public_key_pem(LineEnding::LF),
        };
        pem.map_err(|e| CryptoError::KeyEncoding(e.to_string()))
    }
}
