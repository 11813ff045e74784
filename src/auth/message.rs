//! Canonical message construction.

use super::Action;

/// Fixed prefix of every signed message.
///
/// Together with the `" - "` delimiter this template is the wire
/// contract between signing clients and this verifier; both sides must
/// reproduce it byte-for-byte.
pub const SIGNING_PREFIX: &str = "Next Teacher";

/// Build the canonical message for a claim.
///
/// Format: `Next Teacher - {action} - {walletAddress} - {timestamp}`
///
/// Pure and deterministic: the signer (browser wallet) and the verifier
/// (server) compute it independently from the same three inputs, so the
/// message is never transmitted. The wallet address is used verbatim —
/// any case change would produce a different message and an
/// unverifiable signature.
pub fn signing_message(wallet_address: &str, timestamp: i64, action: Action) -> String {
    format!(
        "{} - {} - {} - {}",
        SIGNING_PREFIX,
        action.as_str(),
        wallet_address,
        timestamp
    )
}
