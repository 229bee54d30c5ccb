//! Integrity verification against a `Content-MD5` style hash.
//!
//! Servers that advertise a content hash send the MD5 digest of the body,
//! encoded with standard (padded) base64. Verification recomputes that exact
//! representation and compares it byte for byte. No normalization is applied
//! to the expected value: surrounding quotes, whitespace or a different case
//! are a legitimate mismatch.
//!
//! # Examples
//!
//! ```rust
//! use verifetch::download::hash::{check_hash, content_md5};
//!
//! let body = b"abcd";
//! assert_eq!(content_md5(body), "4vxxTEcn7pOV8yTNLn8zHw==");
//! assert!(check_hash("4vxxTEcn7pOV8yTNLn8zHw==", body, body.len()));
//!
//! // Base64 of the MD5 of empty input.
//! assert!(check_hash("1B2M2Y8AsgTpgAmY7PhCfg==", &[], 0));
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::{Digest, Md5};

/// Read-only arguments of a hash check.
#[derive(Debug, Clone, Copy)]
pub struct HashCheckInput<'a> {
    /// Expected base64 encoded MD5 digest.
    pub expected_hash: &'a str,
    /// Downloaded bytes.
    pub data: &'a [u8],
    /// Number of leading bytes of `data` to hash.
    pub length: usize,
}

impl<'a> HashCheckInput<'a> {
    /// Creates an input hashing the whole of `data`.
    pub fn new(expected_hash: &'a str, data: &'a [u8]) -> Self {
        Self {
            expected_hash,
            data,
            length: data.len(),
        }
    }

    /// Run the check. See [`check_hash`].
    pub fn check(&self) -> bool {
        check_hash(self.expected_hash, self.data, self.length)
    }
}

/// Compute the `Content-MD5` representation of `data`.
pub fn content_md5(data: &[u8]) -> String {
    STANDARD.encode(Md5::digest(data))
}

/// Check `length` bytes of `data` against a base64 encoded MD5 digest.
///
/// Returns `true` iff the encoded digest equals `expected_hash` exactly.
/// A `length` larger than `data` is clamped to `data.len()`.
pub fn check_hash(expected_hash: &str, data: &[u8], length: usize) -> bool {
    let length = length.min(data.len());
    content_md5(&data[..length]) == expected_hash
}
