use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::consts::{ARGON2_MIN_MEMORY_COST, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub argon2: Argon2Settings,
    pub bcrypt: BcryptSettings,
    pub keys: KeySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Upper bound for `digest_file`, bytes
    pub max_file_size: u64,
    /// Read size for streaming digests, bytes
    pub chunk_size: usize,
}

/// Defaults used when a caller omits Argon2 parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Argon2Settings {
    pub length: u32,
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BcryptSettings {
    pub rounds: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub pbkdf2_iterations: u32,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.limits.chunk_size == 0 {
            return Err(CryptoError::Config("limits.chunk_size must be non-zero".into()));
        }
        if self.argon2.time_cost == 0 || self.argon2.parallelism == 0 {
            return Err(CryptoError::Config(
                "argon2.time_cost and argon2.parallelism must be non-zero".into(),
            ));
        }
        let memory_floor = ARGON2_MIN_MEMORY_COST.saturating_mul(self.argon2.parallelism);
        if self.argon2.memory_cost < memory_floor {
            return Err(CryptoError::Config(format!(
                "argon2.memory_cost must be at least {memory_floor} for parallelism {}",
                self.argon2.parallelism
            )));
        }
        if self.keys.pbkdf2_iterations == 0 {
            return Err(CryptoError::Config("keys.pbkdf2_iterations must be non-zero".into()));
        }
        Ok(())
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once; falls back to defaults if the file is missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        match Config::from_path(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(path = %config_path, error = %err, "invalid config, using built-in defaults");
                Config::default()
            }
        }
    })
}
