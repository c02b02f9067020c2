use crate::config::app::{Argon2Settings, BcryptSettings, KeySettings, Limits};
use crate::consts::*;

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_file_size: MAX_FILE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Default for Argon2Settings {
    fn default() -> Self {
        Argon2Settings {
            length: ARGON2_DEFAULT_LENGTH,
            memory_cost: ARGON2_DEFAULT_MEMORY_COST,
            time_cost: ARGON2_DEFAULT_TIME_COST,
            parallelism: ARGON2_DEFAULT_PARALLELISM,
        }
    }
}

impl Default for BcryptSettings {
    fn default() -> Self {
        BcryptSettings {
            rounds: BCRYPT_DEFAULT_ROUNDS,
        }
    }
}

impl Default for KeySettings {
    fn default() -> Self {
        KeySettings {
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}
