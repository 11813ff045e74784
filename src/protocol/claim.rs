//! The caller-supplied authentication claim.

use serde::{Deserialize, Serialize};

use crate::error::{AuthErrorKind, GateError};

/// The authentication fields of a mutating request body.
///
/// Every field is optional at the wire level: presence is checked by the
/// validator so each missing field yields its own rejection. The request
/// body carries endpoint-specific fields alongside these; they are
/// ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthClaim {
    /// Base58-encoded public key identifying the caller.
    pub wallet_address: Option<String>,

    /// Base64-encoded detached signature over the canonical message.
    pub signature: Option<String>,

    /// Epoch milliseconds at signing time, as produced by the client.
    pub timestamp: Option<i64>,

    /// Optional action label override, for endpoints that permit
    /// several sub-actions.
    pub action_type: Option<String>,
}

impl AuthClaim {
    /// Extract the claim from a raw JSON request body.
    ///
    /// A body that is not a JSON object, or that carries wrong-typed
    /// authentication fields, is a malformed claim, never a panic.
    pub fn from_slice(body: &[u8]) -> Result<Self, GateError> {
        serde_json::from_slice(body).map_err(|e| {
            GateError::auth(AuthErrorKind::MalformedClaim {
                message: e.to_string(),
            })
        })
    }

    /// Extract the claim from an already-parsed JSON value.
    pub fn from_value(body: &serde_json::Value) -> Result<Self, GateError> {
        serde_json::from_value(body.clone()).map_err(|e| {
            GateError::auth(AuthErrorKind::MalformedClaim {
                message: e.to_string(),
            })
        })
    }
}
