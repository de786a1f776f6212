use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::alumni::application::ports::outgoing::{AlumniRepository, AlumniResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetAlumniUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<AlumniResult, GetAlumniError>;
}

pub struct GetAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> GetAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetAlumniUseCase for GetAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<AlumniResult, GetAlumniError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetAlumniError::RepositoryError(e.to_string()))?
            .ok_or(GetAlumniError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::alumni::application::ports::outgoing::{
        AlumniData, AlumniJobCount, AlumniPage, AlumniPageQuery, AlumniRepositoryError,
        CohortCount,
    };
    use chrono::Utc;
    use mockall::mock;

    mock! {
        AlumniRepo {}

        #[async_trait]
        impl AlumniRepository for AlumniRepo {
            async fn find_page(
                &self,
                query: AlumniPageQuery,
            ) -> Result<AlumniPage, AlumniRepositoryError>;
            async fn find_by_id(
                &self,
                id: Uuid,
            ) -> Result<Option<AlumniResult>, AlumniRepositoryError>;
            async fn insert(&self, data: AlumniData) -> Result<AlumniResult, AlumniRepositoryError>;
            async fn update(&self, id: Uuid, data: AlumniData) -> Result<(), AlumniRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError>;
            async fn cohort_counts(&self) -> Result<Vec<CohortCount>, AlumniRepositoryError>;
            async fn multi_job_alumni(&self) -> Result<Vec<AlumniJobCount>, AlumniRepositoryError>;
        }
    }

    fn sample(id: Uuid) -> AlumniResult {
        AlumniResult {
            id,
            nim: "1915016000".into(),
            name: "Budi Santoso".into(),
            major: "Informatika".into(),
            cohort_year: 2019,
            graduation_year: 2023,
            email: "budi@example.com".into(),
            phone: "0812000111".into(),
            address: "Samarinda".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn known_id_returns_the_profile() {
        let id = Uuid::new_v4();
        let mut repo = MockAlumniRepo::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(sample(id))));

        let use_case = GetAlumniUseCase::new(repo);
        let found = use_case.execute(id).await.unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let mut repo = MockAlumniRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetAlumniUseCase::new(repo);
        let res = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(res, Err(GetAlumniError::NotFound)));
    }
}
