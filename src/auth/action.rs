//! Action labels and per-endpoint allow-lists.
//!
//! Every signable operation has a fixed label that is embedded in the
//! canonical message, scoping a signature to exactly one operation.
//! Endpoints resolve the label from a closed allow-list; a caller can
//! never substitute an arbitrary string.

use crate::error::{AuthErrorKind, GateError};

/// An action label the platform signs.
///
/// Labels never contain the `" - "` delimiter used by the canonical
/// message template, so distinct field combinations cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Comment,
    Like,
    Unlike,
    Dislike,
    Undislike,
    DeleteComment,
    AdminDeleteComment,
    CreateTeacher,
    UpdateTeacher,
    AdminUpdateTeacher,
    DeleteTeacher,
    VoteValuable,
    VoteNotValuable,
}

impl Action {
    /// The exact label embedded in the canonical message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Comment => "comment",
            Action::Like => "like",
            Action::Unlike => "unlike",
            Action::Dislike => "dislike",
            Action::Undislike => "undislike",
            Action::DeleteComment => "delete-comment",
            Action::AdminDeleteComment => "admin-delete-comment",
            Action::CreateTeacher => "create-teacher",
            Action::UpdateTeacher => "update-teacher",
            Action::AdminUpdateTeacher => "admin-update-teacher",
            Action::DeleteTeacher => "delete-teacher",
            Action::VoteValuable => "vote-valuable",
            Action::VoteNotValuable => "vote-not_valuable",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutating endpoint and the actions it accepts.
///
/// Each endpoint hardcodes its default action and the exact set of
/// `actionType` overrides callers may select. The first entry in the
/// permitted list is the default used when the claim carries no
/// `actionType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CommentCreate,
    CommentLike,
    CommentUnlike,
    CommentDislike,
    CommentUndislike,
    CommentDelete,
    TeacherCreate,
    TeacherUpdate,
    TeacherDelete,
    ValueVote,
}

impl Endpoint {
    /// Actions this endpoint accepts. The first entry is the default.
    pub fn permitted_actions(&self) -> &'static [Action] {
        match self {
            Endpoint::CommentCreate => &[Action::Comment],
            Endpoint::CommentLike => &[Action::Like],
            Endpoint::CommentUnlike => &[Action::Unlike],
            Endpoint::CommentDislike => &[Action::Dislike],
            Endpoint::CommentUndislike => &[Action::Undislike],
            Endpoint::CommentDelete => &[Action::DeleteComment, Action::AdminDeleteComment],
            Endpoint::TeacherCreate => &[Action::CreateTeacher],
            Endpoint::TeacherUpdate => &[Action::UpdateTeacher, Action::AdminUpdateTeacher],
            Endpoint::TeacherDelete => &[Action::DeleteTeacher],
            Endpoint::ValueVote => &[Action::VoteValuable, Action::VoteNotValuable],
        }
    }

    /// The action used when the claim carries no `actionType`.
    pub fn default_action(&self) -> Action {
        self.permitted_actions()[0]
    }

    /// Resolve the action for a claim.
    ///
    /// `None` resolves to the endpoint default. `Some(label)` must match
    /// one of the permitted actions exactly, otherwise the claim is
    /// rejected before any cryptography runs.
    pub fn resolve_action(&self, action_type: Option<&str>) -> Result<Action, GateError> {
        match action_type {
            None => Ok(self.default_action()),
            Some(label) => self
                .permitted_actions()
                .iter()
                .copied()
                .find(|a| a.as_str() == label)
                .ok_or_else(|| {
                    GateError::auth(AuthErrorKind::UnknownAction {
                        action: label.to_string(),
                    })
                }),
        }
    }
}
