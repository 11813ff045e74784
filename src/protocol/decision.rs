//! Handler-facing rejection and result types.

use serde::Serialize;
use tracing::debug;

use crate::auth::VerifiedClaim;
use crate::error::{AuthErrorKind, AuthzErrorKind, GateError, GateResult};

/// A rejected request, ready for the HTTP layer.
///
/// Carries a stable machine code, a sanitized human message, and the
/// status class the platform uses: 400 for malformed or expired claims,
/// 403 for authentic-but-unauthorized ones. The precise failure detail
/// stays server-side; the client sees only the generic message.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// Stable machine-readable code (e.g. "SIGNATURE_EXPIRED").
    pub code: &'static str,

    /// Sanitized human-readable message.
    pub message: &'static str,

    /// HTTP status the handler should respond with.
    #[serde(skip)]
    pub status: u16,
}

impl Rejection {
    fn new(code: &'static str, message: &'static str, status: u16) -> Self {
        Self {
            code,
            message,
            status,
        }
    }
}

impl From<&GateError> for Rejection {
    /// Map a gate error to its client-visible rejection.
    ///
    /// The full error is logged server-side; decode failures, length
    /// mismatches, and cryptographic failures all surface as the same
    /// generic verification failure.
    fn from(error: &GateError) -> Self {
        debug!(error = %error, "Rejection (sanitized for client)");

        match error {
            GateError::Auth { kind } => match kind {
                AuthErrorKind::InvalidWalletAddress => {
                    Rejection::new("INVALID_WALLET_ADDRESS", "Invalid wallet address", 400)
                }
                AuthErrorKind::MissingSignature => {
                    Rejection::new("MISSING_SIGNATURE", "Missing signature", 400)
                }
                AuthErrorKind::MissingTimestamp => {
                    Rejection::new("MISSING_TIMESTAMP", "Missing timestamp", 400)
                }
                AuthErrorKind::SignatureExpired { .. } => Rejection::new(
                    "SIGNATURE_EXPIRED",
                    "Signature expired, please re-sign",
                    400,
                ),
                AuthErrorKind::SignatureInvalid => {
                    Rejection::new("SIGNATURE_INVALID", "Signature verification failed", 400)
                }
                AuthErrorKind::UnknownAction { .. } => Rejection::new(
                    "INVALID_ACTION",
                    "Action not permitted on this endpoint",
                    400,
                ),
                AuthErrorKind::MalformedClaim { .. } => {
                    Rejection::new("MALFORMED_CLAIM", "Invalid request body", 400)
                }
            },
            GateError::Authz { kind } => match kind {
                AuthzErrorKind::NotCommentAuthor => {
                    Rejection::new("FORBIDDEN", "You may only delete your own comments", 403)
                }
                AuthzErrorKind::AdminRequired { .. } => {
                    Rejection::new("FORBIDDEN", "This action requires an admin wallet", 403)
                }
            },
            GateError::Config { .. } => {
                Rejection::new("INTERNAL_ERROR", "Internal server error", 500)
            }
        }
    }
}

/// A `{valid, reason}` summary of a verification outcome.
///
/// For callers that want a plain boolean signal instead of a `Result`.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl From<&GateResult<VerifiedClaim>> for VerificationResult {
    fn from(result: &GateResult<VerifiedClaim>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                reason: None,
            },
            Err(e) => Self {
                valid: false,
                reason: Some(Rejection::from(e).message),
            },
        }
    }
}
