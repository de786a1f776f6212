use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentRepository, EmploymentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteEmploymentUseCase: Send + Sync {
    /// The ungated hard delete behind plain `DELETE /api/pekerjaan/:id`.
    /// No lifecycle-state or ownership check; this intentionally bypasses
    /// the trash flow and coexists with the gated purge route.
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEmploymentError>;
}

pub struct DeleteEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> DeleteEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IDeleteEmploymentUseCase for DeleteEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEmploymentError> {
        self.repo.delete(id).await.map_err(|e| match e {
            EmploymentRepositoryError::NotFound => DeleteEmploymentError::NotFound,
            other => DeleteEmploymentError::RepositoryError(other.to_string()),
        })
    }
}
