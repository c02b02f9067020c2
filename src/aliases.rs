// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! Passphrases are zeroized on drop and never show up in `Debug` output.

pub use secure_gate::dynamic_alias;

dynamic_alias!(Passphrase, String); // private-key encryption secret

/// Normalise an optional passphrase: `None` and `""` both mean "no encryption".
pub fn non_empty(passphrase: Option<&str>) -> Option<Passphrase> {
    passphrase
        .filter(|p| !p.is_empty())
        .map(|p| Passphrase::new(p.to_owned()))
}
