use crate::error::AccessError;

use super::model::{DraftAccessRecord, Role, SubmissionAccessRecord, SubmissionScope, User};

pub fn is_superadmin(user: &User) -> bool {
    matches!(user.role, Role::Superadmin)
}

pub fn is_viewer(user: &User) -> bool {
    matches!(user.role, Role::Viewer)
}

/// Admin and Verifikator process submissions on behalf of a village.
pub fn is_privileged_processor(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Verifikator)
}

/// The single Forbidden enforcement point.
///
/// Returns the user's desa binaan. Fails for roles that are not
/// village-scoped at all, and for Admin/Verifikator accounts that have
/// not been linked to a village yet. Every other scoping function
/// delegates here instead of re-checking.
pub fn require_assigned_village_id(user: &User) -> Result<i64, AccessError> {
    match user.role {
        Role::Admin | Role::Verifikator => {
            user.assigned_village_id.ok_or(AccessError::Forbidden)
        }
        Role::Superadmin | Role::Viewer => Err(AccessError::Forbidden),
    }
}

/// Derive the list-query scope for this user.
pub fn submission_scope_for_user(user: &User) -> Result<SubmissionScope, AccessError> {
    match user.role {
        Role::Superadmin => Ok(SubmissionScope::Unrestricted),
        Role::Viewer => Ok(SubmissionScope::Owner(user.id)),
        Role::Admin | Role::Verifikator => {
            Ok(SubmissionScope::Village(require_assigned_village_id(user)?))
        }
    }
}

/// May this user read or act on the draft?
///
/// Staff see drafts in their village, plus drafts they own themselves.
/// A draft whose village is still unset has not entered any staff
/// jurisdiction, so non-owning staff do not see it.
pub fn can_access_draft(user: &User, draft: &DraftAccessRecord) -> Result<bool, AccessError> {
    match user.role {
        Role::Superadmin => Ok(true),
        Role::Viewer => Ok(draft.user_id == user.id),
        Role::Admin | Role::Verifikator => {
            if draft.user_id == user.id {
                return Ok(true);
            }
            let village_id = require_assigned_village_id(user)?;
            Ok(draft.village_id == Some(village_id))
        }
    }
}

/// May this user read or act on the submission?
///
/// Unlike drafts there is no self-ownership bypass for staff: once
/// filed, village scope is authoritative and exclusive.
pub fn can_access_submission(
    user: &User,
    submission: &SubmissionAccessRecord,
) -> Result<bool, AccessError> {
    match user.role {
        Role::Superadmin => Ok(true),
        Role::Viewer => Ok(submission.owner_user_id == Some(user.id)),
        Role::Admin | Role::Verifikator => {
            let village_id = require_assigned_village_id(user)?;
            Ok(submission.village_id == village_id)
        }
    }
}

/// Gate a single-draft operation. Denial is NotFound, indistinguishable
/// from a draft that does not exist.
pub fn assert_can_access_draft(
    user: &User,
    draft: &DraftAccessRecord,
) -> Result<(), AccessError> {
    if can_access_draft(user, draft)? {
        Ok(())
    } else {
        log::debug!(
            "draft access denied for user {} (role {:?})",
            user.id,
            user.role
        );
        Err(AccessError::NotFound)
    }
}

/// Gate a single-submission operation. Denial is NotFound.
pub fn assert_can_access_submission(
    user: &User,
    submission: &SubmissionAccessRecord,
) -> Result<(), AccessError> {
    if can_access_submission(user, submission)? {
        Ok(())
    } else {
        log::debug!(
            "submission access denied for user {} (role {:?})",
            user.id,
            user.role
        );
        Err(AccessError::NotFound)
    }
}
