//! Envelope sealing: obfuscation and checksumming of vault payloads.
//!
//! The scheme mirrors what a casual client-side app does with local storage:
//! XOR against a fixed repeating key, a reversible base64-url encoding, and a
//! 32-bit multiply-add checksum. Obfuscation only — not encryption.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Fixed shared obfuscation key. Not a secret.
const OBFUSCATION_KEY: &[u8] = b"banking-sector-2026";

/// What actually lands in the backing store for each vault key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Obfuscated, base64-url-encoded payload.
    pub data: String,
    /// Base-36 rendering of the 32-bit checksum of the plaintext.
    pub hash: String,
    /// Epoch milliseconds at write time.
    pub timestamp: i64,
}

impl Envelope {
    /// Seals a plaintext payload into an envelope.
    #[must_use]
    pub fn seal(plaintext: &str) -> Self {
        Self {
            data: obfuscate(plaintext),
            hash: checksum(plaintext),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Opens the envelope, verifying the checksum over the recovered text.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decoding` if the payload cannot be decoded and
    /// `StoreError::IntegrityCheckFailed` if the recomputed checksum does not
    /// match the stored one. The caller is expected to treat an integrity
    /// failure as silent data loss (delete the entry, return nothing).
    pub fn open(&self, key: &str) -> Result<String, StoreError> {
        let plaintext = deobfuscate(&self.data)?;
        if checksum(&plaintext) != self.hash {
            return Err(StoreError::integrity(key));
        }
        Ok(plaintext)
    }
}

/// Non-cryptographic rolling checksum: `h = h * 31 + byte` over the text,
/// wrapping in 32 bits, rendered in base 36 with the sign kept.
#[must_use]
pub fn checksum(text: &str) -> String {
    let mut hash: i32 = 0;
    for byte in text.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte));
    }
    to_base36(hash)
}

/// Renders a signed 32-bit value in base 36 (digits `0-9a-z`).
fn to_base36(value: i32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let negative = value < 0;
    // Widen before abs so i32::MIN does not overflow.
    let mut remainder = i64::from(value).unsigned_abs();

    let mut out = Vec::new();
    while remainder > 0 {
        out.push(DIGITS[usize::try_from(remainder % 36).unwrap_or(0)]);
        remainder /= 36;
    }
    if negative {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// XOR the payload bytes against the repeating fixed key, then encode.
#[must_use]
pub fn obfuscate(plaintext: &str) -> String {
    let mixed: Vec<u8> = plaintext
        .bytes()
        .enumerate()
        .map(|(i, byte)| byte ^ OBFUSCATION_KEY[i % OBFUSCATION_KEY.len()])
        .collect();
    base64_url::encode(&mixed)
}

/// Reverse of [`obfuscate`].
///
/// # Errors
///
/// Returns `StoreError::Decoding` if the input is not valid base64-url or the
/// recovered bytes are not UTF-8.
pub fn deobfuscate(encoded: &str) -> Result<String, StoreError> {
    let mixed = base64_url::decode(encoded).map_err(|e| StoreError::Decoding(e.to_string()))?;
    let bytes: Vec<u8> = mixed
        .iter()
        .enumerate()
        .map(|(i, byte)| byte ^ OBFUSCATION_KEY[i % OBFUSCATION_KEY.len()])
        .collect();
    String::from_utf8(bytes).map_err(|e| StoreError::Decoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obfuscation_round_trip() {
        let payload = r#"[{"id":"A1","balance":"100.00"}]"#;
        let encoded = obfuscate(payload);
        assert_ne!(encoded, payload);
        assert_eq!(deobfuscate(&encoded).expect("decode"), payload);
    }

    #[test]
    fn test_obfuscation_is_not_identity_on_empty_key_cycle() {
        // A payload longer than the key exercises the key wrap-around.
        let payload = "x".repeat(64);
        let encoded = obfuscate(&payload);
        assert_eq!(deobfuscate(&encoded).expect("decode"), payload);
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = checksum("hello world");
        let b = checksum("hello world");
        assert_eq!(a, b);
        assert_ne!(a, checksum("hello worle"));
    }

    #[test]
    fn test_checksum_of_empty_text() {
        assert_eq!(checksum(""), "0");
    }

    #[test]
    fn test_base36_rendering() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(-36), "-10");
        assert_eq!(to_base36(i32::MIN), "-zik0zk");
    }

    #[test]
    fn test_seal_and_open() {
        let envelope = Envelope::seal(r#"{"token":"mock_token_access_x_1"}"#);
        let plaintext = envelope.open("auth_token").expect("open");
        assert_eq!(plaintext, r#"{"token":"mock_token_access_x_1"}"#);
        assert!(envelope.timestamp > 0);
    }

    #[test]
    fn test_open_detects_tampered_hash() {
        let mut envelope = Envelope::seal("payload");
        envelope.hash = "tampered".to_string();
        let err = envelope.open("auth_token").expect_err("must fail");
        assert!(matches!(err, StoreError::IntegrityCheckFailed { .. }));
    }

    #[test]
    fn test_open_detects_tampered_payload() {
        let mut envelope = Envelope::seal("payload");
        let other = Envelope::seal("payloae");
        envelope.data = other.data;
        let err = envelope.open("auth_token").expect_err("must fail");
        assert!(matches!(err, StoreError::IntegrityCheckFailed { .. }));
    }

    #[test]
    fn test_open_rejects_undecodable_payload() {
        let mut envelope = Envelope::seal("payload");
        envelope.data = "!!!not-base64!!!".to_string();
        let err = envelope.open("auth_token").expect_err("must fail");
        assert!(matches!(err, StoreError::Decoding(_)));
    }
}
