//! Wallet-signature authentication for the Next Teacher review platform.
//!
//! This crate decides, for a single mutating request, whether the caller
//! genuinely controls the claimed wallet (Ed25519 public key) and
//! whether the claim is fresh enough to accept. Verification is
//! stateless: a claim is a `(walletAddress, signature, timestamp,
//! actionType)` tuple, the canonical message is recomputed from it, and
//! the decision is returned synchronously to the calling handler.

pub mod auth;
pub mod config;
pub mod error;
pub mod policy;
pub mod protocol;
pub mod validation;
