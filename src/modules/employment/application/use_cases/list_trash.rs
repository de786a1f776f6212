use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::CallerIdentity;
use crate::modules::employment::application::domain::lifecycle::TrashScope;
use crate::modules::employment::application::ports::outgoing::{
    EmploymentArchiver, EmploymentArchiverError, TrashEntry,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTrashError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListTrashUseCase: Send + Sync {
    /// Admins see the whole trash; everyone else only records they own.
    /// An empty list is a valid result; the route decides how to surface it.
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<TrashEntry>, ListTrashError>;
}

pub struct ListTrashUseCase<A>
where
    A: EmploymentArchiver,
{
    archiver: A,
}

impl<A> ListTrashUseCase<A>
where
    A: EmploymentArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> IListTrashUseCase for ListTrashUseCase<A>
where
    A: EmploymentArchiver + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<TrashEntry>, ListTrashError> {
        let scope = TrashScope::for_caller(&caller);

        self.archiver
            .trash_entries(scope)
            .await
            .map_err(|e| ListTrashError::RepositoryError(e.to_string()))
    }
}
