//! Wallet-signature authentication.
//!
//! Handles canonical message construction, timestamp freshness,
//! Ed25519 signature verification, and the composite claim check that
//! gates every mutating endpoint.

mod action;
mod freshness;
mod message;
mod signature;
mod validator;

pub use action::{Action, Endpoint};
pub use freshness::{is_timestamp_fresh, now_epoch_ms, DEFAULT_TOLERANCE_MS};
pub use message::{signing_message, SIGNING_PREFIX};
pub use signature::{verify_detached, PUBLIC_KEY_LEN, SIGNATURE_LEN};
pub use validator::{SignatureValidator, VerifiedClaim};
