//! Ed25519 detached-signature verification.
//!
//! The wallet address is a base58-encoded Ed25519 public key; the
//! signature arrives base64-encoded. Every failure mode — bad encoding,
//! wrong length, cryptographic mismatch — collapses into a plain
//! `false` so callers see a single boolean signal and clients cannot
//! probe which sub-step failed.

use base64::Engine;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 detached signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Decode a base58 wallet address into raw public key bytes.
pub(crate) fn decode_wallet_address(address: &str) -> Option<[u8; PUBLIC_KEY_LEN]> {
    let bytes = bs58::decode(address).into_vec().ok()?;
    bytes.try_into().ok()
}

/// Decode a base64 signature into raw signature bytes.
pub(crate) fn decode_signature(signature_b64: &str) -> Option<[u8; SIGNATURE_LEN]> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(signature_b64)
        .ok()?;
    bytes.try_into().ok()
}

/// Verify a detached signature over the UTF-8 bytes of `message`.
///
/// Returns `true` iff `signature_b64` decodes to exactly 64 bytes,
/// `wallet_address` decodes to a valid 32-byte Ed25519 public key, and
/// the signature verifies. Never panics, never returns an error.
pub fn verify_detached(message: &str, signature_b64: &str, wallet_address: &str) -> bool {
    let Some(key_bytes) = decode_wallet_address(wallet_address) else {
        return false;
    };
    let Some(sig_bytes) = decode_signature(signature_b64) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let signature = Signature::from_bytes(&sig_bytes);

    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}
