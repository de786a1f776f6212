use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::employment::application::ports::outgoing::{
    EmploymentArchiver, EmploymentArchiverError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRestoreEmploymentUseCase: Send + Sync {
    /// Returns a record to the active state by unsetting both lifecycle
    /// fields. Idempotent when the record is already active.
    ///
    /// Unlike discard and purge this operation carries no ownership or role
    /// check; the surrounding route admits any authenticated caller. Known
    /// authorization gap, kept as-is deliberately.
    async fn execute(&self, id: Uuid) -> Result<(), RestoreEmploymentError>;
}

pub struct RestoreEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    archiver: A,
}

impl<A> RestoreEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> IRestoreEmploymentUseCase for RestoreEmploymentUseCase<A>
where
    A: EmploymentArchiver + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), RestoreEmploymentError> {
        self.archiver.restore(id).await.map_err(|e| match e {
            EmploymentArchiverError::NotFound => RestoreEmploymentError::NotFound,
            other => RestoreEmploymentError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::employment::application::domain::lifecycle::TrashScope;
    use crate::modules::employment::application::ports::outgoing::{OwnershipStatus, TrashEntry};

    struct StubArchiver {
        result: Result<(), EmploymentArchiverError>,
    }

    #[async_trait]
    impl EmploymentArchiver for StubArchiver {
        async fn soft_delete(&self, _id: Uuid, _actor: Uuid) -> Result<(), EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn restore(&self, _id: Uuid) -> Result<(), EmploymentArchiverError> {
            self.result.clone()
        }

        async fn hard_delete(&self, _id: Uuid) -> Result<(), EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn trash_entries(
            &self,
            _scope: TrashScope,
        ) -> Result<Vec<TrashEntry>, EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn owner_of(&self, _id: Uuid) -> Result<Uuid, EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn ownership_status(
            &self,
            _id: Uuid,
        ) -> Result<OwnershipStatus, EmploymentArchiverError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn restore_succeeds() {
        let uc = RestoreEmploymentUseCase::new(StubArchiver { result: Ok(()) });
        assert!(uc.execute(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let uc = RestoreEmploymentUseCase::new(StubArchiver {
            result: Err(EmploymentArchiverError::NotFound),
        });
        let res = uc.execute(Uuid::new_v4()).await;
        assert!(matches!(res, Err(RestoreEmploymentError::NotFound)));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let uc = RestoreEmploymentUseCase::new(StubArchiver {
            result: Err(EmploymentArchiverError::DatabaseError("db down".into())),
        });
        let res = uc.execute(Uuid::new_v4()).await;
        assert!(matches!(
            res,
            Err(RestoreEmploymentError::RepositoryError(msg)) if msg.contains("db down")
        ));
    }
}
