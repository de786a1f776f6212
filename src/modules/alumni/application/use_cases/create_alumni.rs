use async_trait::async_trait;

use crate::modules::alumni::application::ports::outgoing::{
    AlumniData, AlumniRepository, AlumniResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAlumniError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateAlumniUseCase: Send + Sync {
    async fn execute(&self, data: AlumniData) -> Result<AlumniResult, CreateAlumniError>;
}

pub struct CreateAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> CreateAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICreateAlumniUseCase for CreateAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, data: AlumniData) -> Result<AlumniResult, CreateAlumniError> {
        self.repo
            .insert(data)
            .await
            .map_err(|e| CreateAlumniError::RepositoryError(e.to_string()))
    }
}
