//! Pure computation: digests, password hashes, key pairs
//!
//! Nothing here holds state between calls; randomness is always passed in.

pub mod digest;
pub mod keys;
pub mod password;

pub use digest::{digest, digest_named, digest_stream, Digester, FileDigest};
pub use keys::{
    derive_public_key, generate_ed25519, generate_rsa, inspect_private_key, load_private_key,
    KeyDetails, PrivateKey,
};
pub use password::{
    argon2_hash, bcrypt_hash, verify_argon2, verify_bcrypt, Argon2Params, BcryptParams,
};
