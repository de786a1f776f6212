use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Input for create and update. `nim` and `email` are only honored at
/// creation; updates leave both untouched.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AlumniData {
    pub nim: String,

    #[serde(rename = "nama")]
    pub name: String,

    #[serde(rename = "jurusan")]
    pub major: String,

    #[serde(rename = "angkatan")]
    pub cohort_year: i32,

    #[serde(rename = "tahun_lulus")]
    pub graduation_year: i32,

    pub email: String,

    #[serde(rename = "no_telepon")]
    pub phone: String,

    #[serde(rename = "alamat")]
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlumniResult {
    pub id: Uuid,
    pub nim: String,

    #[serde(rename = "nama")]
    pub name: String,

    #[serde(rename = "jurusan")]
    pub major: String,

    #[serde(rename = "angkatan")]
    pub cohort_year: i32,

    #[serde(rename = "tahun_lulus")]
    pub graduation_year: i32,

    pub email: String,

    #[serde(rename = "no_telepon")]
    pub phone: String,

    #[serde(rename = "alamat")]
    pub address: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than a literal `desc` (any case) sorts ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Normalized page request. `page` is 1-based; both fields are clamped to
/// sane values before a query ever sees them.
#[derive(Debug, Clone)]
pub struct AlumniPageQuery {
    pub page: u64,
    pub limit: u64,
    /// Wire-name of the column to sort on, e.g. `nama` or `angkatan`.
    /// Unknown names fall back to `nama` in the adapter.
    pub sort_by: String,
    pub order: SortOrder,
    /// Case-insensitive substring match on name and major.
    pub search: Option<String>,
}

impl AlumniPageQuery {
    pub fn new(
        page: u64,
        limit: u64,
        sort_by: String,
        order: SortOrder,
        search: Option<String>,
    ) -> Self {
        Self {
            page: page.max(1),
            limit: if limit == 0 { 10 } else { limit },
            sort_by,
            order,
            search: search.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlumniPage {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub data: Vec<AlumniResult>,
}

/// One row of the per-cohort headcount aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct CohortCount {
    #[serde(rename = "angkatan")]
    pub cohort_year: i32,

    #[serde(rename = "jumlah")]
    pub count: i64,
}

/// Alumni holding two or more employment records.
#[derive(Debug, Clone, Serialize)]
pub struct AlumniJobCount {
    #[serde(rename = "nama")]
    pub name: String,

    #[serde(rename = "jumlah_pekerjaan")]
    pub job_count: i64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AlumniRepositoryError {
    #[error("Alumni not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AlumniRepository: Send + Sync {
    /// One page of profiles plus the total match count for the same filter.
    async fn find_page(&self, query: AlumniPageQuery)
        -> Result<AlumniPage, AlumniRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AlumniResult>, AlumniRepositoryError>;

    async fn insert(&self, data: AlumniData) -> Result<AlumniResult, AlumniRepositoryError>;

    /// Partial update: everything except `nim` and `email`, plus a fresh
    /// `updated_at`. `NotFound` when no row matched.
    async fn update(&self, id: Uuid, data: AlumniData) -> Result<(), AlumniRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError>;

    /// Headcount per cohort year, ascending by year.
    async fn cohort_counts(&self) -> Result<Vec<CohortCount>, AlumniRepositoryError>;

    /// Names of alumni with two or more employment records.
    async fn multi_job_alumni(&self) -> Result<Vec<AlumniJobCount>, AlumniRepositoryError>;
}
