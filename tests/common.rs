// tests/common.rs
//! Shared test utilities: logging setup and a fast engine
#![allow(dead_code)]

use crypto_engine::config::{Argon2Settings, Config, KeySettings};
use crypto_engine::Engine;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; safe to call from every test
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Defaults, except cheap KDF and Argon2 costs so the suite stays quick
pub fn fast_config() -> Config {
    Config {
        argon2: Argon2Settings {
            memory_cost: 1024,
            time_cost: 1,
            ..Argon2Settings::default()
        },
        keys: KeySettings {
            pbkdf2_iterations: 1_000,
        },
        ..Config::default()
    }
}

pub fn test_engine() -> Engine {
    setup();
    Engine::new(fast_config())
}
