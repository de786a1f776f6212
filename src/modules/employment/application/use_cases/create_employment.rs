use async_trait::async_trait;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentData, EmploymentRepository, EmploymentResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEmploymentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateEmploymentUseCase: Send + Sync {
    /// New records are always active: no deletion marker, no actor.
    async fn execute(&self, data: EmploymentData)
        -> Result<EmploymentResult, CreateEmploymentError>;
}

pub struct CreateEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> CreateEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICreateEmploymentUseCase for CreateEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: EmploymentData,
    ) -> Result<EmploymentResult, CreateEmploymentError> {
        self.repo
            .insert(data)
            .await
            .map_err(|e| CreateEmploymentError::RepositoryError(e.to_string()))
    }
}
