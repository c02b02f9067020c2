//! Password hashing: Argon2id (memory-hard) and bcrypt (cost factor)
//!
//! Both schemes draw a fresh salt per call, and substitute a random payload
//! when the caller supplies none. Outputs are self-describing encoded strings.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use bcrypt::BcryptError;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::config::{Argon2Settings, BcryptSettings};
use crate::consts::*;
use crate::error::{CryptoError, Result};
use crate::random::{random_payload, random_token};

const BCRYPT_SALT_LEN: usize = 16;
const ARGON2_SALT_LEN: usize = 16;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Output length, bytes
    pub length: u32,
    /// Memory cost, KiB
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Argon2Params::from(&Argon2Settings::default())
    }
}

impl From<&Argon2Settings> for Argon2Params {
    fn from(settings: &Argon2Settings) -> Self {
        Argon2Params {
            length: settings.length,
            memory_cost: settings.memory_cost,
            time_cost: settings.time_cost,
            parallelism: settings.parallelism,
        }
    }
}

impl Argon2Params {
    /// Caller-tunable values with the remaining costs taken from `settings`
    pub fn with_costs(length: u32, memory_cost: u32, settings: &Argon2Settings) -> Self {
        Argon2Params {
            length,
            memory_cost,
            ..Argon2Params::from(settings)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(ARGON2_MIN_LENGTH..=ARGON2_MAX_LENGTH).contains(&self.length) {
            return Err(CryptoError::out_of_range(
                "length",
                self.length,
                format!("{ARGON2_MIN_LENGTH}..={ARGON2_MAX_LENGTH}"),
            ));
        }
        if !(ARGON2_MIN_MEMORY_COST..=ARGON2_MAX_MEMORY_COST).contains(&self.memory_cost) {
            return Err(CryptoError::out_of_range(
                "memory_cost",
                self.memory_cost,
                format!("{ARGON2_MIN_MEMORY_COST}..={ARGON2_MAX_MEMORY_COST}"),
            ));
        }
        Ok(())
    }
}

/// Bcrypt cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptParams {
    pub rounds: u32,
}

impl Default for BcryptParams {
    fn default() -> Self {
        BcryptParams::from(&BcryptSettings::default())
    }
}

impl From<&BcryptSettings> for BcryptParams {
    fn from(settings: &BcryptSettings) -> Self {
        BcryptParams {
            rounds: settings.rounds,
        }
    }
}

impl BcryptParams {
    pub fn validate(&self) -> Result<()> {
        if !(BCRYPT_MIN_ROUNDS..=BCRYPT_MAX_ROUNDS).contains(&self.rounds) {
            return Err(CryptoError::out_of_range(
                "rounds",
                self.rounds,
                format!("{BCRYPT_MIN_ROUNDS}..={BCRYPT_MAX_ROUNDS}"),
            ));
        }
        Ok(())
    }
}

/// Argon2id PHC string: `$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`
///
/// Without a payload, a hex random token is hashed instead. The string is
/// assembled here rather than by `password-hash`, whose `Output` refuses
/// hashes shorter than 10 bytes.
pub fn argon2_hash<R: RngCore + CryptoRng>(
    rng: &mut R,
    payload: Option<&str>,
    params: &Argon2Params,
) -> Result<String> {
    if let Err(err) = params.validate() {
        warn!(error = %err, "argon2 parameters rejected");
        return Err(err);
    }
    debug!(
        length = params.length,
        memory_cost = params.memory_cost,
        time_cost = params.time_cost,
        parallelism = params.parallelism,
        fallback_payload = payload.is_none(),
        "argon2 hash"
    );

    let argon2 = argon2id(params.memory_cost, params.time_cost, params.parallelism, params.length)
        .inspect_err(|err| warn!(error = %err, "argon2 parameters rejected"))?;

    let payload = match payload {
        Some(p) => p.to_owned(),
        None => random_token(rng),
    };
    let mut salt = [0u8; ARGON2_SALT_LEN];
    rng.fill_bytes(&mut salt);

    let mut output = vec![0u8; params.length as usize];
    argon2
        .hash_password_into(payload.as_bytes(), &salt, &mut output)
        .map_err(|e| CryptoError::PasswordHash(e.to_string()))?;

    Ok(format!(
        "${}$v={}$m={},t={},p={}${}${}",
        Algorithm::Argon2id,
        Version::V0x13 as u32,
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(&output),
    ))
}

fn argon2id(
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
    length: u32,
) -> Result<Argon2<'static>> {
    let params = argon2_params(memory_cost, time_cost, parallelism, length)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn argon2_params(
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
    length: u32,
) -> Result<Params> {
    Params::new(memory_cost, time_cost, parallelism, Some(length as usize)).map_err(|e| match e {
        // the memory floor scales with the lane count
        argon2::Error::MemoryTooLittle => CryptoError::out_of_range(
            "memory_cost",
            memory_cost,
            format!(
                "{}..={ARGON2_MAX_MEMORY_COST} with parallelism {parallelism}",
                ARGON2_MIN_MEMORY_COST.saturating_mul(parallelism)
            ),
        ),
        other => CryptoError::PasswordHash(other.to_string()),
    })
}

/// Fields of an Argon2 PHC string
struct EncodedArgon2 {
    algorithm: Algorithm,
    version: Version,
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

fn malformed(reason: &str) -> CryptoError {
    CryptoError::PasswordHash(format!("malformed argon2 hash: {reason}"))
}

fn parse_argon2(encoded: &str) -> Result<EncodedArgon2> {
    let mut fields = encoded.split('$');
    if fields.next() != Some("") {
        return Err(malformed("missing leading '$'"));
    }
    let algorithm: Algorithm = fields
        .next()
        .ok_or_else(|| malformed("missing algorithm"))?
        .parse()
        .map_err(|_| malformed("unknown algorithm"))?;

    let mut rest: Vec<&str> = fields.collect();
    // `v=` may be omitted, meaning version 0x10
    let version = match rest.first().copied().and_then(|f| f.strip_prefix("v=")) {
        Some(number) => {
            let number: u32 = number.parse().map_err(|_| malformed("bad version"))?;
            rest.remove(0);
            Version::try_from(number).map_err(|_| malformed("unknown version"))?
        }
        _ => Version::V0x10,
    };
    let [costs, salt, hash] = rest[..] else {
        return Err(malformed("expected parameters, salt and hash"));
    };

    let (mut memory_cost, mut time_cost, mut parallelism) = (None, None, None);
    for pair in costs.split(',') {
        let (key, value) = pair.split_once('=').ok_or_else(|| malformed("bad parameter"))?;
        let value: u32 = value.parse().map_err(|_| malformed("bad parameter value"))?;
        match key {
            "m" => memory_cost = Some(value),
            "t" => time_cost = Some(value),
            "p" => parallelism = Some(value),
            _ => return Err(malformed("unknown parameter")),
        }
    }

    Ok(EncodedArgon2 {
        algorithm,
        version,
        memory_cost: memory_cost.ok_or_else(|| malformed("missing m"))?,
        time_cost: time_cost.ok_or_else(|| malformed("missing t"))?,
        parallelism: parallelism.ok_or_else(|| malformed("missing p"))?,
        salt: STANDARD_NO_PAD.decode(salt).map_err(|_| malformed("bad salt"))?,
        hash: STANDARD_NO_PAD.decode(hash).map_err(|_| malformed("bad hash"))?,
    })
}

/// Modular-crypt bcrypt string: `$2b$<cost>$<salt><hash>`
///
/// Without a payload, raw random bytes are hashed instead. `rounds = 32`
/// passes the range check but bcrypt itself stops at 31, so it is refused
/// as [`CryptoError::InvalidParameterRange`] by the backend.
pub fn bcrypt_hash<R: RngCore + CryptoRng>(
    rng: &mut R,
    payload: Option<&str>,
    params: &BcryptParams,
) -> Result<String> {
    if let Err(err) = params.validate() {
        warn!(error = %err, "bcrypt parameters rejected");
        return Err(err);
    }
    debug!(rounds = params.rounds, fallback_payload = payload.is_none(), "bcrypt hash");

    let payload = match payload {
        Some(p) => p.as_bytes().to_vec(),
        None => random_payload(rng),
    };
    let mut salt = [0u8; BCRYPT_SALT_LEN];
    rng.fill_bytes(&mut salt);

    let parts = bcrypt::hash_with_salt(&payload, params.rounds, salt).map_err(|e| match e {
        // the scheme itself tops out at 31
        BcryptError::CostNotAllowed(cost) => CryptoError::out_of_range(
            "rounds",
            cost,
            format!("{BCRYPT_MIN_ROUNDS}..=31 supported by bcrypt"),
        ),
        other => CryptoError::PasswordHash(other.to_string()),
    })?;
    Ok(parts.format_for_version(bcrypt::Version::TwoB))
}

/// Check `payload` against an Argon2 PHC string
///
/// Accepts any output length the hash carries, including the 8 and 9 byte
/// hashes `argon2_hash` can produce.
pub fn verify_argon2(payload: &str, encoded: &str) -> Result<bool> {
    let parsed = parse_argon2(encoded)?;
    let length = u32::try_from(parsed.hash.len()).map_err(|_| malformed("hash too long"))?;
    let params = argon2_params(parsed.memory_cost, parsed.time_cost, parsed.parallelism, length)?;
    let argon2 = Argon2::new(parsed.algorithm, parsed.version, params);

    let mut output = vec![0u8; parsed.hash.len()];
    argon2
        .hash_password_into(payload.as_bytes(), &parsed.salt, &mut output)
        .map_err(|e| CryptoError::PasswordHash(e.to_string()))?;
    Ok(bool::from(output.ct_eq(&parsed.hash)))
}

/// Check `payload` against a bcrypt string
pub fn verify_bcrypt(payload: &str, encoded: &str) -> Result<bool> {
    bcrypt::verify(payload, encoded).map_err(|e| CryptoError::PasswordHash(e.to_string()))
}
