use ed25519_dalek::SigningKey;
use pkcs8::der::pem::PemLabel;
use pkcs8::{EncryptedPrivateKeyInfo, PrivateKeyInfo, SecretDocument};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::RsaPrivateKey;
use serde::Serialize;
use tracing::debug;

use super::PrivateKey;
use crate::aliases::Passphrase;
use crate::enums::KeyAlgorithm;
use crate::error::{CryptoError, Result};

const PKCS1_RSA_LABEL: &str = "RSA PRIVATE KEY";

/// What a private key PEM turned out to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyDetails {
    pub algorithm: KeyAlgorithm,
    pub encrypted: bool,
}

fn format_error(err: impl std::fmt::Display) -> CryptoError {
    CryptoError::InvalidKeyFormat(err.to_string())
}

/// Parse a private key PEM, decrypting it when it is an encrypted PKCS#8 document.
///
/// A passphrase must be given exactly when the key is encrypted:
/// plain key + passphrase is [`CryptoError::UnexpectedPassphrase`],
/// encrypted key without (or with the wrong) passphrase is
/// [`CryptoError::DecryptionFailed`]. Anything unparseable is
/// [`CryptoError::InvalidKeyFormat`].
pub fn load_private_key(pem: &str, passphrase: Option<&Passphrase>) -> Result<PrivateKey> {
    let passphrase = passphrase.filter(|p| !p.expose_secret().is_empty());
    let (label, document) = SecretDocument::from_pem(pem.trim()).map_err(format_error)?;

    if label == PrivateKeyInfo::PEM_LABEL {
        let info = PrivateKeyInfo::try_from(document.as_bytes()).map_err(format_error)?;
        if passphrase.is_some() {
            return Err(CryptoError::UnexpectedPassphrase);
        }
        decode_private_key_info(info)
    } else if label == EncryptedPrivateKeyInfo::PEM_LABEL {
        let encrypted =
            EncryptedPrivateKeyInfo::try_from(document.as_bytes()).map_err(format_error)?;
        let passphrase = passphrase.ok_or(CryptoError::DecryptionFailed)?;
        let decrypted = encrypted
            .decrypt(passphrase.expose_secret().as_bytes())
            .map_err(|_| CryptoError::DecryptionFailed)?;
        // CBC padding can survive a wrong key by chance; the DER inside will not
        let info = PrivateKeyInfo::try_from(decrypted.as_bytes())
            .map_err(|_| CryptoError::DecryptionFailed)?;
        decode_private_key_info(info)
    } else if label == PKCS1_RSA_LABEL {
        let key = RsaPrivateKey::from_pkcs1_der(document.as_bytes()).map_err(format_error)?;
        if passphrase.is_some() {
            return Err(CryptoError::UnexpectedPassphrase);
        }
        Ok(PrivateKey::Rsa(key))
    } else {
        Err(CryptoError::InvalidKeyFormat(format!(
            "expected a private key PEM, found \"{label}\""
        )))
    }
}

fn decode_private_key_info(info: PrivateKeyInfo<'_>) -> Result<PrivateKey> {
    let oid = info.algorithm.oid;
    if oid == rsa::pkcs1::ALGORITHM_OID {
        RsaPrivateKey::try_from(info)
            .map(PrivateKey::Rsa)
            .map_err(format_error)
    } else if oid == ed25519_dalek::pkcs8::ALGORITHM_OID {
        SigningKey::try_from(info)
            .map(PrivateKey::Ed25519)
            .map_err(format_error)
    } else {
        Err(CryptoError::InvalidKeyFormat(format!(
            "unsupported key algorithm {oid}"
        )))
    }
}

/// SubjectPublicKeyInfo PEM for the given private key PEM
pub fn derive_public_key(pem: &str, passphrase: Option<&Passphrase>) -> Result<String> {
    let key = load_private_key(pem, passphrase)?;
    debug!(algorithm = %key.algorithm(), "deriving public key");
    key.public_key_pem()
}

/// Key family and encryption state, with the same passphrase rules as
/// [`load_private_key`]
pub fn inspect_private_key(pem: &str, passphrase: Option<&Passphrase>) -> Result<KeyDetails> {
    let key = load_private_key(pem, passphrase)?;
    Ok(KeyDetails {
        algorithm: key.algorithm(),
        encrypted: passphrase.is_some_and(|p| !p.expose_secret().is_empty()),
    })
}
