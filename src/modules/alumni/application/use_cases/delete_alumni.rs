use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAlumniUseCase: Send + Sync {
    /// Removes the profile permanently. Employment rows follow via the
    /// cascading foreign key.
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAlumniError>;
}

pub struct DeleteAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> DeleteAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IDeleteAlumniUseCase for DeleteAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAlumniError> {
        self.repo.delete(id).await.map_err(|e| match e {
            AlumniRepositoryError::NotFound => DeleteAlumniError::NotFound,
            other => DeleteAlumniError::RepositoryError(other.to_string()),
        })
    }
}
