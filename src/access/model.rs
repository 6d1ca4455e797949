use serde::{Deserialize, Serialize};

/// User role. The set is closed on purpose: every access function
/// matches exhaustively, so adding a role forces each one to be
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Verifikator,
    Viewer,
}

/// Authenticated user as handed over by the identity provider. The core
/// never authenticates; it only authorizes against this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub role: Role,
    /// Desa binaan for Admin/Verifikator. Must be set before any
    /// village-scoped operation; enforced, not assumed.
    pub assigned_village_id: Option<i64>,
}

/// Ownership view of an in-progress draft. `village_id` stays `None`
/// until the applicant picks a village, so until then the draft is
/// visible to its owner only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAccessRecord {
    pub user_id: i64,
    pub village_id: Option<i64>,
}

/// Ownership view of a filed submission. Village is fixed at creation
/// and authoritative for staff scoping; there is no mid-creation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAccessRecord {
    pub owner_user_id: Option<i64>,
    pub village_id: i64,
}

/// Query scope a listing endpoint must apply on top of its filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionScope {
    /// Superadmin: no restriction.
    Unrestricted,
    /// Viewer: rows owned by this user id.
    Owner(i64),
    /// Admin/Verifikator: rows in this village.
    Village(i64),
}
