use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentRepository, EmploymentResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetEmploymentUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<EmploymentResult, GetEmploymentError>;
}

pub struct GetEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> GetEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetEmploymentUseCase for GetEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<EmploymentResult, GetEmploymentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetEmploymentError::RepositoryError(e.to_string()))?
            .ok_or(GetEmploymentError::NotFound)
    }
}
