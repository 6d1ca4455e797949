use thiserror::Error;

/// Errors raised by the access scoping engine.
///
/// These are the only two error kinds the core produces. `Forbidden`
/// comes from exactly one place, [`crate::access::require_assigned_village_id`],
/// and propagates unchanged. `NotFound` is what the `assert_can_access_*`
/// functions return on denial, on purpose indistinguishable from a record
/// that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("akses ditolak: akun belum terhubung ke desa binaan")]
    Forbidden,
    #[error("data pengajuan tidak ditemukan")]
    NotFound,
}
