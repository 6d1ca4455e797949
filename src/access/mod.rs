//! Access scoping for drafts and submissions.
//!
//! Runs first on every draft/submission operation. The one Forbidden
//! enforcement point is [`require_assigned_village_id`]; every denial
//! surfaced to a caller looking up a specific record is NotFound, so an
//! unauthorized caller cannot tell a hidden record from a missing one.

pub mod model;
pub mod scope;

pub use model::{DraftAccessRecord, Role, SubmissionAccessRecord, SubmissionScope, User};
pub use scope::{
    assert_can_access_draft, assert_can_access_submission, can_access_draft,
    can_access_submission, is_privileged_processor, is_superadmin, is_viewer,
    require_assigned_village_id, submission_scope_for_user,
};
