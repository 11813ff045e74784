//! Error types for the wallet authentication gate.

use thiserror::Error;

/// Main error type for the authentication gate.
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Authentication errors (the claim itself is not acceptable).
    #[error("Authentication error: {kind}")]
    Auth { kind: AuthErrorKind },

    /// Authorization errors (authentic claim, disallowed identity).
    #[error("Authorization error: {kind}")]
    Authz { kind: AuthzErrorKind },
}

/// Authentication error kinds.
///
/// Every variant is a terminal rejection; nothing is retried. A caller
/// that fails must mint a fresh timestamp and signature and resubmit.
#[derive(Error, Debug)]
pub enum AuthErrorKind {
    #[error("Invalid wallet address")]
    InvalidWalletAddress,

    #[error("Missing signature")]
    MissingSignature,

    #[error("Missing timestamp")]
    MissingTimestamp,

    #[error("Signature expired: clock skew {skew_ms}ms exceeds tolerance")]
    SignatureExpired { skew_ms: i64 },

    /// Decode failures, length mismatches, and cryptographic failures
    /// all collapse into this one variant.
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Action '{action}' is not permitted on this endpoint")]
    UnknownAction { action: String },

    #[error("Malformed claim: {message}")]
    MalformedClaim { message: String },
}

/// Authorization error kinds.
#[derive(Error, Debug)]
pub enum AuthzErrorKind {
    #[error("Only the comment author or an admin wallet may delete this comment")]
    NotCommentAuthor,

    #[error("Action '{action}' requires an admin wallet")]
    AdminRequired { action: &'static str },
}

/// Result type alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;

impl GateError {
    /// Shorthand for constructing an authentication error.
    pub fn auth(kind: AuthErrorKind) -> Self {
        GateError::Auth { kind }
    }

    /// Shorthand for constructing an authorization error.
    pub fn authz(kind: AuthzErrorKind) -> Self {
        GateError::Authz { kind }
    }
}
