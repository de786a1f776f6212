use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentData, EmploymentRepository, EmploymentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateEmploymentUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: EmploymentData)
        -> Result<(), UpdateEmploymentError>;
}

pub struct UpdateEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> UpdateEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateEmploymentUseCase for UpdateEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: EmploymentData) -> Result<(), UpdateEmploymentError> {
        self.repo.update(id, data).await.map_err(|e| match e {
            EmploymentRepositoryError::NotFound => UpdateEmploymentError::NotFound,
            other => UpdateEmploymentError::RepositoryError(other.to_string()),
        })
    }
}
