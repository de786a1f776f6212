use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::CallerIdentity;
use crate::modules::employment::application::ports::outgoing::{
    EmploymentRepository, EmploymentResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOwnEmploymentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListOwnEmploymentUseCase: Send + Sync {
    /// The caller's own records, keyed by their user id. Trashed records
    /// are included; this is the raw per-owner view, not the active list.
    async fn execute(
        &self,
        caller: CallerIdentity,
    ) -> Result<Vec<EmploymentResult>, ListOwnEmploymentError>;
}

pub struct ListOwnEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    repo: R,
}

impl<R> ListOwnEmploymentUseCase<R>
where
    R: EmploymentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IListOwnEmploymentUseCase for ListOwnEmploymentUseCase<R>
where
    R: EmploymentRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
    ) -> Result<Vec<EmploymentResult>, ListOwnEmploymentError> {
        self.repo
            .find_by_alumni(caller.user_id)
            .await
            .map_err(|e| ListOwnEmploymentError::RepositoryError(e.to_string()))
    }
}
