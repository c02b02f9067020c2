// src/config/mod.rs
//! Configuration system for crypto-engine
//!
//! Central, lazy-loaded global config with TOML + env override.

pub use app::{load, Argon2Settings, BcryptSettings, Config, KeySettings, Limits};

mod app;
mod defaults;
