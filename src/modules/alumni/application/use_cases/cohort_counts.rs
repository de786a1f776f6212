use async_trait::async_trait;

use crate::modules::alumni::application::ports::outgoing::{AlumniRepository, CohortCount};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CohortCountsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICohortCountsUseCase: Send + Sync {
    /// Headcount per cohort year, ascending. Years with no alumni simply
    /// do not appear.
    async fn execute(&self) -> Result<Vec<CohortCount>, CohortCountsError>;
}

pub struct CohortCountsUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> CohortCountsUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICohortCountsUseCase for CohortCountsUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CohortCount>, CohortCountsError> {
        self.repo
            .cohort_counts()
            .await
            .map_err(|e| CohortCountsError::RepositoryError(e.to_string()))
    }
}
