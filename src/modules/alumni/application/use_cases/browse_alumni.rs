use async_trait::async_trait;

use crate::modules::alumni::application::ports::outgoing::{
    AlumniPage, AlumniPageQuery, AlumniRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseAlumniError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IBrowseAlumniUseCase: Send + Sync {
    /// One page of profiles, filtered and sorted per the query. An empty
    /// page is a normal result, not an error.
    async fn execute(&self, query: AlumniPageQuery) -> Result<AlumniPage, BrowseAlumniError>;
}

pub struct BrowseAlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: R,
}

impl<R> BrowseAlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IBrowseAlumniUseCase for BrowseAlumniUseCase<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, query: AlumniPageQuery) -> Result<AlumniPage, BrowseAlumniError> {
        self.repo
            .find_page(query)
            .await
            .map_err(|e| BrowseAlumniError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::alumni::application::ports::outgoing::{
        AlumniJobCount, AlumniRepositoryError, AlumniResult, CohortCount, SortOrder,
    };
    use crate::modules::alumni::application::ports::outgoing::AlumniData;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct StubAlumniRepo {
        seen_query: Mutex<Option<AlumniPageQuery>>,
    }

    #[async_trait]
    impl AlumniRepository for StubAlumniRepo {
        async fn find_page(
            &self,
            query: AlumniPageQuery,
        ) -> Result<AlumniPage, AlumniRepositoryError> {
            let page = query.page;
            let limit = query.limit;
            *self.seen_query.lock().unwrap() = Some(query);
            Ok(AlumniPage {
                page,
                limit,
                total: 0,
                total_pages: 0,
                data: vec![],
            })
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<AlumniResult>, AlumniRepositoryError> {
            unimplemented!()
        }

        async fn insert(&self, _data: AlumniData) -> Result<AlumniResult, AlumniRepositoryError> {
            unimplemented!()
        }

        async fn update(&self, _id: Uuid, _data: AlumniData) -> Result<(), AlumniRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), AlumniRepositoryError> {
            unimplemented!()
        }

        async fn cohort_counts(&self) -> Result<Vec<CohortCount>, AlumniRepositoryError> {
            unimplemented!()
        }

        async fn multi_job_alumni(&self) -> Result<Vec<AlumniJobCount>, AlumniRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn normalizes_page_and_limit_before_querying() {
        let repo = StubAlumniRepo {
            seen_query: Mutex::new(None),
        };
        let query = AlumniPageQuery::new(0, 0, "nama".into(), SortOrder::Asc, Some(String::new()));

        let use_case = BrowseAlumniUseCase::new(repo);
        let page = use_case.execute(query).await.unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);

        let seen = use_case.repo.seen_query.lock().unwrap().take().unwrap();
        assert_eq!(seen.page, 1);
        assert_eq!(seen.limit, 10);
        // Blank search collapses to no filter.
        assert!(seen.search.is_none());
    }
}
