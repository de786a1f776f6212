use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::employment::application::domain::lifecycle::TrashScope;

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// Listing projection of a trashed record, joined with the owning alumni
/// profile. Derived by query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TrashEntry {
    pub id: Uuid,
    pub alumni_id: Uuid,

    #[serde(rename = "nama_alumni")]
    pub alumni_name: String,

    #[serde(rename = "nama_perusahaan")]
    pub company: String,

    #[serde(rename = "posisi_jabatan")]
    pub position: String,

    #[serde(rename = "bidang_industri")]
    pub industry: String,

    #[serde(rename = "lokasi_kerja")]
    pub location: String,

    #[serde(rename = "is_deleted")]
    pub deleted_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

/// Owner plus lifecycle state, fetched in one read to drive the purge
/// preconditions. `trashed` is derived from marker presence, never from a
/// stored boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipStatus {
    pub owner: Uuid,
    pub trashed: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmploymentArchiverError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (lifecycle mutations and trash queries)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EmploymentArchiver: Send + Sync {
    /// Sets the deletion marker to now and records the deleting actor.
    async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<(), EmploymentArchiverError>;

    /// Unsets marker and actor (NULL, not false). Idempotent on active
    /// records; `NotFound` only when the id does not exist.
    async fn restore(&self, id: Uuid) -> Result<(), EmploymentArchiverError>;

    async fn hard_delete(&self, id: Uuid) -> Result<(), EmploymentArchiverError>;

    /// Trashed records visible under `scope`, joined with alumni names.
    async fn trash_entries(
        &self,
        scope: TrashScope,
    ) -> Result<Vec<TrashEntry>, EmploymentArchiverError>;

    async fn owner_of(&self, id: Uuid) -> Result<Uuid, EmploymentArchiverError>;

    async fn ownership_status(&self, id: Uuid)
        -> Result<OwnershipStatus, EmploymentArchiverError>;
}
