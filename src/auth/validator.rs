//! Composite claim verification.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{AuthErrorKind, GateError, GateResult};
use crate::protocol::AuthClaim;
use crate::validation::validate_wallet_address;

use super::freshness::{clock_skew_ms, is_timestamp_fresh, now_epoch_ms, DEFAULT_TOLERANCE_MS};
use super::message::signing_message;
use super::signature::verify_detached;
use super::{Action, Endpoint};

/// A claim that passed every authentication check.
///
/// This is the only input the policy layer accepts, so authorization
/// can never run ahead of authentication.
#[derive(Debug, Clone)]
pub struct VerifiedClaim {
    /// The wallet address, in the caller-supplied case.
    pub wallet_address: String,
    /// The action the signature was verified against.
    pub action: Action,
    /// The claim timestamp (epoch milliseconds).
    pub timestamp: i64,
}

impl VerifiedClaim {
    /// Case-insensitive identity comparison, as stored wallet addresses
    /// are lowercased by the persistence layer.
    pub fn is_same_wallet(&self, other: &str) -> bool {
        self.wallet_address.eq_ignore_ascii_case(other)
    }
}

/// Validator for wallet-signed claims.
///
/// Stateless apart from its configuration; safe to share across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct SignatureValidator {
    tolerance_ms: i64,
    min_wallet_address_len: usize,
}

impl Default for SignatureValidator {
    fn default() -> Self {
        Self {
            tolerance_ms: DEFAULT_TOLERANCE_MS,
            min_wallet_address_len: 32,
        }
    }
}

impl SignatureValidator {
    /// Create a validator with an explicit replay tolerance.
    pub fn new(tolerance_ms: i64) -> Self {
        Self {
            tolerance_ms,
            ..Self::default()
        }
    }

    /// Create a validator from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tolerance_ms: settings.auth.tolerance_ms,
            min_wallet_address_len: settings.auth.min_wallet_address_len,
        }
    }

    /// Verify a claim against the current clock.
    ///
    /// Checks, in order, short-circuiting on the first failure:
    /// 1. wallet address present and plausible
    /// 2. signature present
    /// 3. timestamp present
    /// 4. timestamp within the replay tolerance (cheap check first)
    /// 5. action resolved from the endpoint allow-list
    /// 6. Ed25519 signature valid over the canonical message
    pub fn verify_claim(&self, claim: &AuthClaim, endpoint: Endpoint) -> GateResult<VerifiedClaim> {
        self.verify_claim_at(claim, endpoint, now_epoch_ms())
    }

    /// Verify a claim against an explicit verifier clock.
    pub fn verify_claim_at(
        &self,
        claim: &AuthClaim,
        endpoint: Endpoint,
        now_ms: i64,
    ) -> GateResult<VerifiedClaim> {
        let result = self.check(claim, endpoint, now_ms);
        match &result {
            Ok(verified) => debug!(
                action = %verified.action,
                wallet = %verified.wallet_address,
                "Claim verified"
            ),
            Err(e) => warn!(error = %e, "Claim rejected"),
        }
        result
    }

    fn check(
        &self,
        claim: &AuthClaim,
        endpoint: Endpoint,
        now_ms: i64,
    ) -> GateResult<VerifiedClaim> {
        let wallet_address = claim
            .wallet_address
            .as_deref()
            .ok_or_else(|| GateError::auth(AuthErrorKind::InvalidWalletAddress))?;
        validate_wallet_address(wallet_address, self.min_wallet_address_len)?;

        let signature = claim
            .signature
            .as_deref()
            .ok_or_else(|| GateError::auth(AuthErrorKind::MissingSignature))?;

        let timestamp = claim
            .timestamp
            .ok_or_else(|| GateError::auth(AuthErrorKind::MissingTimestamp))?;

        if !is_timestamp_fresh(timestamp, now_ms, self.tolerance_ms) {
            let skew_ms = clock_skew_ms(timestamp, now_ms).unwrap_or(i64::MAX);
            return Err(GateError::auth(AuthErrorKind::SignatureExpired { skew_ms }));
        }

        let action = endpoint.resolve_action(claim.action_type.as_deref())?;

        let message = signing_message(wallet_address, timestamp, action);
        if !verify_detached(&message, signature, wallet_address) {
            return Err(GateError::auth(AuthErrorKind::SignatureInvalid));
        }

        Ok(VerifiedClaim {
            wallet_address: wallet_address.to_string(),
            action,
            timestamp,
        })
    }
}
