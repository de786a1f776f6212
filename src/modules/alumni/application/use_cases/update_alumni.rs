use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::alumni::application::ports::outgoing::{
    AlumniData, AlumniRepository, AlumniRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateAlumniUseCase: Send + Sync {
    /// Rewrites the profile in place. `nim` and `email` stay as created.
    async fn execute(&self, id: Uuid, data: AlumniData) -> Result<(), UpdateAlumniError>;
}

pub struct UpdateAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> UpdateAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateAlumniUseCase for UpdateAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: AlumniData) -> Result<(), UpdateAlumniError> {
        self.repo.update(id, data).await.map_err(|e| match e {
            AlumniRepositoryError::NotFound => UpdateAlumniError::NotFound,
            other => UpdateAlumniError::RepositoryError(other.to_string()),
        })
    }
}
