//! Keyed-hash primitives for gateway request and response signatures.
//!
//! WorldNet signs every XML document with a lowercase hex MD5 digest over a
//! documented field concatenation followed by the terminal's shared secret.
//! HMAC-SHA256 is kept alongside for terminals provisioned with the newer
//! signature scheme.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{self, CustomResult};

/// Signs a message with a secret.
pub trait SignMessage: Send + Sync {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Verifies a signature against a message and a secret.
pub trait VerifySignature: Send + Sync {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError>;
}

/// Algorithm that accepts everything. Used where a flow carries no signature.
#[derive(Debug, Clone, Copy)]
pub struct NoAlgorithm;

impl SignMessage for NoAlgorithm {
    fn sign_message(
        &self,
        _secret: &[u8],
        _msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError> {
        Ok(Vec::new())
    }
}

impl VerifySignature for NoAlgorithm {
    fn verify_signature(
        &self,
        _secret: &[u8],
        _signature: &[u8],
        _msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError> {
        Ok(true)
    }
}

/// Plain MD5 over message bytes with the secret appended.
///
/// The digest is compared and emitted as lowercase hex, matching what the
/// gateway renders into the `HASH` element.
#[derive(Debug, Clone, Copy)]
pub struct Md5;

impl SignMessage for Md5 {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let mut payload = Vec::with_capacity(msg.len() + secret.len());
        payload.extend_from_slice(msg);
        payload.extend_from_slice(secret);
        Ok(md5::compute(payload).to_vec())
    }
}

impl VerifySignature for Md5 {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError> {
        let computed = self.sign_message(secret, msg)?;
        let received = hex::decode(signature)
            .map_err(|_| error_stack::report!(errors::CryptoError::EncodingFailed))?;
        Ok(computed == received)
    }
}

/// HMAC-SHA256, secret as key.
#[derive(Debug, Clone, Copy)]
pub struct HmacSha256;

impl SignMessage for HmacSha256 {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret)
            .map_err(|_| error_stack::report!(errors::CryptoError::MessageSigningFailed))?;
        mac.update(msg);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl VerifySignature for HmacSha256 {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret)
            .map_err(|_| error_stack::report!(errors::CryptoError::SignatureVerificationFailed))?;
        mac.update(msg);
        Ok(mac.verify_slice(signature).is_ok())
    }
}

/// Lowercase hex rendering of a digest, as the gateway expects it on the wire.
pub fn hex_digest(digest: &[u8]) -> String {
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn md5_known_vectors() {
        // RFC 1321 test suite values.
        let digest = Md5.sign_message(b"", b"").unwrap();
        assert_eq!(hex_digest(&digest), "d41d8cd98f00b204e9800998ecf8428e");

        let digest = Md5.sign_message(b"c", b"ab").unwrap();
        assert_eq!(hex_digest(&digest), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn md5_verify_roundtrip() {
        let digest = Md5.sign_message(b"secret", b"6491002ORDER00110.0012-08-2026:21:30:45:123").unwrap();
        let hex = hex_digest(&digest);
        assert_eq!(hex.len(), crate::consts::MD5_HEX_LENGTH);
        assert!(Md5
            .verify_signature(b"secret", hex.as_bytes(), b"6491002ORDER00110.0012-08-2026:21:30:45:123")
            .unwrap());
        assert!(!Md5
            .verify_signature(b"other", hex.as_bytes(), b"6491002ORDER00110.0012-08-2026:21:30:45:123")
            .unwrap());
    }

    #[test]
    fn hmac_sha256_roundtrip() {
        let signature = HmacSha256.sign_message(b"key", b"message").unwrap();
        assert!(HmacSha256
            .verify_signature(b"key", &signature, b"message")
            .unwrap());
        assert!(!HmacSha256
            .verify_signature(b"key", &signature, b"other message")
            .unwrap());
    }
}
