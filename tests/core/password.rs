use crypto_engine::config::{Argon2Settings, Config};
use crypto_engine::{CryptoError, Engine};

use crate::common::{fast_config, setup, test_engine};

#[test]
fn test_argon2_hash_is_self_describing() {
    let engine = test_engine();
    let hash = engine.argon2_hash(Some("password"), 16, 256).unwrap();
    assert!(hash.starts_with("$argon2id$v=19$m=256,t=1,p=1$"), "{hash}");
    assert!(engine.verify_argon2("password", &hash).unwrap());
    assert!(!engine.verify_argon2("Password", &hash).unwrap());
}

#[test]
fn test_argon2_shortest_outputs_round_trip() {
    let engine = test_engine();
    for length in [8, 9] {
        let hash = engine.argon2_hash(Some("short"), length, 8).unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=8,t=1,p=1$"), "{hash}");
        assert!(engine.verify_argon2("short", &hash).unwrap());
        assert!(!engine.verify_argon2("shorT", &hash).unwrap());
    }
}

#[test]
fn test_argon2_memory_below_lane_floor_is_a_client_error() {
    setup();
    let engine = Engine::new(Config {
        argon2: Argon2Settings {
            parallelism: 2,
            ..fast_config().argon2
        },
        ..fast_config()
    });
    let err = engine.argon2_hash(Some("pw"), 16, 8).unwrap_err();
    assert!(
        matches!(err, CryptoError::InvalidParameterRange { parameter: "memory_cost", .. }),
        "{err}"
    );
    assert!(err.is_client_error());
    assert!(engine.argon2_hash(Some("pw"), 16, 16).is_ok());
}

#[test]
fn test_argon2_without_payload() {
    let engine = test_engine();
    let a = engine.argon2_hash(None, 32, 64).unwrap();
    let b = engine.argon2_hash(None, 32, 64).unwrap();
    assert!(a.starts_with("$argon2id$"));
    assert_ne!(a, b);
}

#[test]
fn test_argon2_default_parameters_from_config() {
    let engine = test_engine();
    let hash = engine.argon2_hash_default(Some("pw")).unwrap();
    assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"), "{hash}");
}

#[test]
fn test_argon2_rejects_out_of_range() {
    let engine = test_engine();
    let cases = [(7, 64), (33, 64), (16, 7), (16, 244_142)];
    for (length, memory_cost) in cases {
        let err = engine
            .argon2_hash(Some("pw"), length, memory_cost)
            .unwrap_err();
        assert!(
            matches!(err, CryptoError::InvalidParameterRange { .. }),
            "length={length} memory_cost={memory_cost}"
        );
    }
}

#[test]
fn test_bcrypt_hash_embeds_cost() {
    let engine = test_engine();
    let hash = engine.bcrypt_hash(Some("password"), 8).unwrap();
    assert!(hash.starts_with("$2b$08$"), "{hash}");
    assert!(engine.verify_bcrypt("password", &hash).unwrap());
    assert!(!engine.verify_bcrypt("passw0rd", &hash).unwrap());
}

#[test]
fn test_bcrypt_without_payload() {
    let engine = test_engine();
    let hash = engine.bcrypt_hash(None, 8).unwrap();
    assert!(hash.starts_with("$2b$08$"));
    assert_eq!(hash.len(), 60);
}

#[test]
fn test_bcrypt_rejects_out_of_range() {
    let engine = test_engine();
    for rounds in [4, 7, 32, 40] {
        assert!(matches!(
            engine.bcrypt_hash(Some("pw"), rounds),
            Err(CryptoError::InvalidParameterRange { parameter: "rounds", .. })
        ));
    }
}
