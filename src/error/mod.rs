//! Error types for the wallet authentication gate.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
