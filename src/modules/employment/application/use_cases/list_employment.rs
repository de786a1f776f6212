use async_trait::async_trait;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentRepository, EmploymentResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEmploymentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListEmploymentUseCase: Send + Sync {
    /// All active records; trashed ones never appear here. Any
    /// authenticated caller sees the full active set.
    async fn execute(&self) -> Result<Vec<EmploymentResult>, ListEmploymentError>;
}

pub struct ListEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> ListEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IListEmploymentUseCase for ListEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EmploymentResult>, ListEmploymentError> {
        self.repo
            .find_active()
            .await
            .map_err(|e| ListEmploymentError::RepositoryError(e.to_string()))
    }
}
