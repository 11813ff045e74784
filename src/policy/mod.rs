//! Authorization policy above the signature gate.
//!
//! Every function here consumes a [`VerifiedClaim`], so an identity
//! check can never run against an unauthenticated wallet. Authorization
//! failures are reported distinctly from authentication failures (403,
//! not 400): the claim is genuine, the identity just is not permitted.

mod admin;

pub use admin::AdminWallets;

use crate::auth::{Action, VerifiedClaim};
use crate::error::{AuthzErrorKind, GateError, GateResult};

/// Authorize deletion of a comment.
///
/// Permitted for the comment's author, or for an admin wallet that
/// signed the admin delete label. Plain OR: an author match alone is
/// sufficient even when the admin label is present.
pub fn authorize_comment_delete(
    claim: &VerifiedClaim,
    comment_author: &str,
    admins: &AdminWallets,
) -> GateResult<()> {
    let is_author = claim.is_same_wallet(comment_author);
    let is_admin_action =
        claim.action == Action::AdminDeleteComment && admins.is_admin(&claim.wallet_address);

    if is_author || is_admin_action {
        Ok(())
    } else {
        Err(GateError::authz(AuthzErrorKind::NotCommentAuthor))
    }
}

/// Authorize deletion of a teacher record.
///
/// Only admin wallets may delete teachers.
pub fn authorize_teacher_delete(claim: &VerifiedClaim, admins: &AdminWallets) -> GateResult<()> {
    if admins.is_admin(&claim.wallet_address) {
        Ok(())
    } else {
        Err(GateError::authz(AuthzErrorKind::AdminRequired {
            action: Action::DeleteTeacher.as_str(),
        }))
    }
}

/// Authorize an update of a teacher record.
///
/// Plain updates are open to any authenticated wallet; the admin update
/// label requires an admin wallet.
pub fn authorize_teacher_update(claim: &VerifiedClaim, admins: &AdminWallets) -> GateResult<()> {
    if claim.action == Action::AdminUpdateTeacher && !admins.is_admin(&claim.wallet_address) {
        return Err(GateError::authz(AuthzErrorKind::AdminRequired {
            action: Action::AdminUpdateTeacher.as_str(),
        }));
    }
    Ok(())
}
