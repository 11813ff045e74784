//! Request and response types at the handler boundary.

mod claim;
mod decision;

pub use claim::AuthClaim;
pub use decision::{Rejection, VerificationResult};
