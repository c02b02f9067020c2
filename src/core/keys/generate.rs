use ed25519_dalek::SigningKey;
use rand::{CryptoRng, RngCore};
use rsa::{BigUint, RsaPrivateKey};
use tracing::{debug, info};

use super::encode::encode_private_key;
use crate::aliases::Passphrase;
use crate::consts::RSA_PUBLIC_EXPONENT;
use crate::enums::RsaKeySize;
use crate::error::{CryptoError, Result};

/// New RSA key (e = 65537) as PKCS#8 PEM
pub fn generate_rsa<R: RngCore + CryptoRng>(
    rng: &mut R,
    size: RsaKeySize,
    passphrase: Option<&Passphrase>,
    pbkdf2_iterations: u32,
) -> Result<String> {
    debug!(bits = size.bits(), encrypted = passphrase.is_some(), "generating RSA key");

    let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
    let key = RsaPrivateKey::new_with_exp(&mut *rng, size.bits(), &exponent)
        .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    let pem = encode_private_key(&key, rng, passphrase, pbkdf2_iterations)?;

    info!(bits = size.bits(), encrypted = passphrase.is_some(), "RSA key generated");
    Ok(pem)
}

/// New Ed25519 key as PKCS#8 PEM
pub fn generate_ed25519<R: RngCore + CryptoRng>(
    rng: &mut R,
    passphrase: Option<&Passphrase>,
    pbkdf2_iterations: u32,
) -> Result<String> {
    let key = SigningKey::generate(&mut *rng);
    let pem = encode_private_key(&key, rng, passphrase, pbkdf2_iterations)?;

    info!(encrypted = passphrase.is_some(), "Ed25519 key generated");
    Ok(pem)
}
