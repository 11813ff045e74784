//! Wallet address shape validation.
//!
//! A plausibility gate only: full key decoding happens during signature
//! verification, so a wallet that decodes badly surfaces as the generic
//! verification failure rather than a distinct, probe-friendly error.

use crate::error::{AuthErrorKind, GateError};

/// Validate the shape of an encoded wallet address.
///
/// Rules:
/// - Must not be empty
/// - Must be at least `min_len` characters (32 in the reference system)
pub fn validate_wallet_address(address: &str, min_len: usize) -> Result<(), GateError> {
    if address.is_empty() || address.len() < min_len {
        return Err(GateError::auth(AuthErrorKind::InvalidWalletAddress));
    }
    Ok(())
}
