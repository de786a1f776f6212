use async_trait::async_trait;

use crate::modules::alumni::application::ports::outgoing::{AlumniJobCount, AlumniRepository};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MultiJobAlumniError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IMultiJobAlumniUseCase: Send + Sync {
    /// Alumni with two or more employment records, trashed ones included.
    async fn execute(&self) -> Result<Vec<AlumniJobCount>, MultiJobAlumniError>;
}

pub struct MultiJobAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> MultiJobAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IMultiJobAlumniUseCase for MultiJobAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AlumniJobCount>, MultiJobAlumniError> {
        self.repo
            .multi_job_alumni()
            .await
            .map_err(|e| MultiJobAlumniError::RepositoryError(e.to_string()))
    }
}
