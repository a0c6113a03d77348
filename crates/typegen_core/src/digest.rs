//! Deterministic short digests.
//!
//! Collision suffixes and import aliases only need determinism and a negligible collision rate, so both
//! are prefixes of the lowercase hex SHA-256 of their input.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `input`.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// First `len` hex characters of the SHA-256 of `input` (at most 64).
pub fn short_digest(input: &str, len: usize) -> String {
    let mut hex = sha256_hex(input);
    hex.truncate(len);
    hex
}
