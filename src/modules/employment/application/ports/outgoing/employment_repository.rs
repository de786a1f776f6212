use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Input for create and full-field update. The owning alumni reference is
/// only honored at creation; updates never move a record to another alumni.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct EmploymentData {
    pub alumni_id: Uuid,

    #[serde(rename = "nama_perusahaan")]
    pub company: String,

    #[serde(rename = "posisi_jabatan")]
    pub position: String,

    #[serde(rename = "bidang_industri")]
    pub industry: String,

    #[serde(rename = "lokasi_kerja")]
    pub location: String,

    #[serde(rename = "gaji_range")]
    pub salary_range: String,

    #[serde(rename = "tanggal_mulai_kerja")]
    pub start_date: String,

    #[serde(rename = "tanggal_selesai_kerja")]
    pub end_date: String,

    #[serde(rename = "status_pekerjaan")]
    pub status: String,

    #[serde(rename = "deskripsi_pekerjaan")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmploymentResult {
    pub id: Uuid,
    pub alumni_id: Uuid,

    #[serde(rename = "nama_perusahaan")]
    pub company: String,

    #[serde(rename = "posisi_jabatan")]
    pub position: String,

    #[serde(rename = "bidang_industri")]
    pub industry: String,

    #[serde(rename = "lokasi_kerja")]
    pub location: String,

    #[serde(rename = "gaji_range")]
    pub salary_range: String,

    #[serde(rename = "tanggal_mulai_kerja")]
    pub start_date: String,

    #[serde(rename = "tanggal_selesai_kerja")]
    pub end_date: String,

    #[serde(rename = "status_pekerjaan")]
    pub status: String,

    #[serde(rename = "deskripsi_pekerjaan")]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// The deletion marker: `None` on every active record. Serialized under
    /// the historical wire name.
    #[serde(rename = "is_deleted", skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmploymentRepositoryError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (plain CRUD; lifecycle mutations live on the archiver)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EmploymentRepository: Send + Sync {
    /// Every record whose deletion marker is absent.
    async fn find_active(&self) -> Result<Vec<EmploymentResult>, EmploymentRepositoryError>;

    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<EmploymentResult>, EmploymentRepositoryError>;

    async fn find_by_alumni(
        &self,
        alumni_id: Uuid,
    ) -> Result<Vec<EmploymentResult>, EmploymentRepositoryError>;

    async fn insert(&self, data: EmploymentData)
        -> Result<EmploymentResult, EmploymentRepositoryError>;

    /// Full-field update; `NotFound` when no row matched.
    async fn update(&self, id: Uuid, data: EmploymentData)
        -> Result<(), EmploymentRepositoryError>;

    /// Unconditional removal, no state gate. The gated purge goes through
    /// the archiver.
    async fn delete(&self, id: Uuid) -> Result<(), EmploymentRepositoryError>;
}
