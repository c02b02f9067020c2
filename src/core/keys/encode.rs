use pkcs8::der::pem::PemLabel;
use pkcs8::pkcs5::pbes2;
use pkcs8::{EncodePrivateKey, EncryptedPrivateKeyInfo, LineEnding, PrivateKeyInfo};
use rand::{CryptoRng, RngCore};

use crate::aliases::Passphrase;
use crate::consts::{AES_IV_LEN, PBES2_SALT_LEN};
use crate::error::{CryptoError, Result};

fn encoding_error(err: impl std::fmt::Display) -> CryptoError {
    CryptoError::KeyEncoding(err.to_string())
}

/// PKCS#8 PEM, PBES2-encrypted (PBKDF2-HMAC-SHA256 + AES-256-CBC) when a
/// passphrase is present.
pub(super) fn encode_private_key<K, R>(
    key: &K,
    rng: &mut R,
    passphrase: Option<&Passphrase>,
    pbkdf2_iterations: u32,
) -> Result<String>
where
    K: EncodePrivateKey,
    R: RngCore + CryptoRng,
{
    let Some(passphrase) = passphrase.filter(|p| !p.expose_secret().is_empty()) else {
        let pem = key.to_pkcs8_pem(LineEnding::LF).map_err(encoding_error)?;
        return Ok(pem.as_str().to_owned());
    };

    let der = key.to_pkcs8_der().map_err(encoding_error)?;
    let info = PrivateKeyInfo::try_from(der.as_bytes()).map_err(encoding_error)?;

    let mut salt = [0u8; PBES2_SALT_LEN];
    let mut iv = [0u8; AES_IV_LEN];
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut iv);

    let params = pbes2::Parameters::pbkdf2_sha256_aes256cbc(pbkdf2_iterations, &salt, &iv)
        .map_err(encoding_error)?;
    let encrypted = info
        .encrypt_with_params(params, passphrase.expose_secret().as_bytes())
        .map_err(encoding_error)?;
    let pem = encrypted
        .to_pem(EncryptedPrivateKeyInfo::PEM_LABEL, LineEnding::LF)
        .map_err(encoding_error)?;
    Ok(pem.as_str().to_owned())
}
