// src/consts.rs
//! Shared constants: parameter bounds and defaults

/// Largest stream `digest_file` accepts (512 MiB)
pub const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Read size for streaming digests
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Argon2 output length bounds, bytes
pub const ARGON2_MIN_LENGTH: u32 = 8;
pub const ARGON2_MAX_LENGTH: u32 = 32;

/// Argon2 memory cost bounds, KiB
pub const ARGON2_MIN_MEMORY_COST: u32 = 8;
pub const ARGON2_MAX_MEMORY_COST: u32 = 244_141;

pub const ARGON2_DEFAULT_LENGTH: u32 = 32;
pub const ARGON2_DEFAULT_MEMORY_COST: u32 = 65_536;
pub const ARGON2_DEFAULT_TIME_COST: u32 = 3;
pub const ARGON2_DEFAULT_PARALLELISM: u32 = 1;

/// Bcrypt cost factor bounds
pub const BCRYPT_MIN_ROUNDS: u32 = 8;
pub const BCRYPT_MAX_ROUNDS: u32 = 32;
pub const BCRYPT_DEFAULT_ROUNDS: u32 = 12;

/// Random token size bounds, bytes (hex output is twice as long)
pub const TOKEN_MIN_BYTES: usize = 32;
pub const TOKEN_MAX_BYTES: usize = 128;

/// Fixed RSA public exponent (F4)
pub const RSA_PUBLIC_EXPONENT: u32 = 65_537;

/// PBKDF2-HMAC-SHA256 iterations for passphrase-encrypted private keys
// same work factor the vault used for per-file keys
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

pub const PBES2_SALT_LEN: usize = 16;
pub const AES_IV_LEN: usize = 16;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CRYPTO_ENGINE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "crypto-engine.toml";
