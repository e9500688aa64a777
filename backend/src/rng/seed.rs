//! Seed derivation
//!
//! `seed = u64::from_be_bytes(SHA-256(utf8(key))[0..8])`
//!
//! SHA-256 is used for its fixed, platform-independent definition rather
//! than for any cryptographic property.

use sha2::{Digest, Sha256};

/// Derive a 64-bit seed from a string key (a county name)
pub fn seed_from_key(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
