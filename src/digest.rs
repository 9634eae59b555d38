// File: src/digest.rs
//! Hash digests and Base64 of a number's decimal text.
//!
//! Everything here works on the bytes of `n.to_string()`, never on the
//! binary integer: the MD5 of 52 is the MD5 of `b"52"`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::Md5;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digests {
    pub md5: String,
    pub sha256: String,
    pub base64: String,
}

impl Digests {
    pub fn of(n: i64) -> Self {
        let text = n.to_string();
        let bytes = text.as_bytes();
        Self {
            md5: md5_hex(bytes),
            sha256: sha256_hex(bytes),
            base64: base64_encode(bytes),
        }
    }
}

/// Lowercase hex MD5.
pub fn md5_hex(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Lowercase hex SHA-256.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Standard alphabet, padded.
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
