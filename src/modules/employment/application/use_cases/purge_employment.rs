use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::CallerIdentity;
use crate::modules::employment::application::domain::lifecycle::may_discard;
use crate::modules::employment::application::ports::outgoing::{
    EmploymentArchiver, EmploymentArchiverError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PurgeEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    /// Purge is only legal from the trashed state, whatever the caller's
    /// role.
    #[error("Record has not been soft-deleted yet")]
    NotTrashed,

    #[error("Caller may not permanently delete this record")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IPurgeEmploymentUseCase: Send + Sync {
    /// Gated hard delete: trashed-state check first, then ownership/role.
    async fn execute(&self, id: Uuid, caller: CallerIdentity)
        -> Result<(), PurgeEmploymentError>;
}

pub struct PurgeEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    archiver: A,
}

impl<A> PurgeEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> IPurgeEmploymentUseCase for PurgeEmploymentUseCase<A>
where
    A: EmploymentArchiver + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        caller: CallerIdentity,
    ) -> Result<(), PurgeEmploymentError> {
        let status = self
            .archiver
            .ownership_status(id)
            .await
            .map_err(|e| match e {
                EmploymentArchiverError::NotFound => PurgeEmploymentError::NotFound,
                other => PurgeEmploymentError::RepositoryError(other.to_string()),
            })?;

        if !status.trashed {
            return Err(PurgeEmploymentError::NotTrashed);
        }

        if !may_discard(&caller, status.owner) {
            return Err(PurgeEmploymentError::Forbidden);
        }

        self.archiver.hard_delete(id).await.map_err(|e| match e {
            EmploymentArchiverError::NotFound => PurgeEmploymentError::NotFound,
            other => PurgeEmploymentError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::employment::application::domain::lifecycle::TrashScope;
    use crate::modules::employment::application::ports::outgoing::{OwnershipStatus, TrashEntry};
    use std::sync::Mutex;

    struct StubArchiver {
        status: Option<OwnershipStatus>,
        hard_deleted: Mutex<Option<Uuid>>,
    }

    impl StubArchiver {
        fn with_status(owner: Uuid, trashed: bool) -> Self {
            Self {
                status: Some(OwnershipStatus { owner, trashed }),
                hard_deleted: Mutex::new(None),
            }
        }

        fn missing() -> Self {
            Self {
                status: None,
                hard_deleted: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl EmploymentArchiver for StubArchiver {
        async fn soft_delete(&self, _id: Uuid, _actor: Uuid) -> Result<(), EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn restore(&self, _id: Uuid) -> Result<(), EmploymentArchiverError> {
            unimplemented!("not used")
        }

        async fn hard_delete(&self, id: Uuid) -> Result<(), EmploymentArchiverError> {
            *self.hard_deleted.lock().unwrap() = Some(id);
            Ok(())
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
            self.status.ok_or(EmploymentArchiverError::NotFound)
        }
    }

    #[tokio::test]
    async fn trashed_record_can_be_purged_by_owner() {
        let owner = Uuid::new_v4();
        let record = Uuid::new_v4();
        let uc = PurgeEmploymentUseCase::new(StubArchiver::with_status(owner, true));

        uc.execute(record, CallerIdentity::new(owner, Role::User))
            .await
            .unwrap();
        assert_eq!(*uc.archiver.hard_deleted.lock().unwrap(), Some(record));
    }

    #[tokio::test]
    async fn active_record_is_rejected_even_for_admin() {
        let uc = PurgeEmploymentUseCase::new(StubArchiver::with_status(Uuid::new_v4(), false));

        let res = uc
            .execute(Uuid::new_v4(), CallerIdentity::new(Uuid::new_v4(), Role::Admin))
            .await;

        assert!(matches!(res, Err(PurgeEmploymentError::NotTrashed)));
        assert!(uc.archiver.hard_deleted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn state_check_runs_before_ownership_check() {
        // A stranger purging an active record sees NotTrashed, not Forbidden.
        let uc = PurgeEmploymentUseCase::new(StubArchiver::with_status(Uuid::new_v4(), false));

        let res = uc
            .execute(Uuid::new_v4(), CallerIdentity::new(Uuid::new_v4(), Role::User))
            .await;

        assert!(matches!(res, Err(PurgeEmploymentError::NotTrashed)));
    }

    #[tokio::test]
    async fn trashed_record_of_another_user_is_forbidden() {
        let uc = PurgeEmploymentUseCase::new(StubArchiver::with_status(Uuid::new_v4(), true));

        let res = uc
            .execute(Uuid::new_v4(), CallerIdentity::new(Uuid::new_v4(), Role::User))
            .await;

        assert!(matches!(res, Err(PurgeEmploymentError::Forbidden)));
        assert!(uc.archiver.hard_deleted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let uc = PurgeEmploymentUseCase::new(StubArchiver::missing());

        let res = uc
            .execute(Uuid::new_v4(), CallerIdentity::new(Uuid::new_v4(), Role::Admin))
            .await;

        assert!(matches!(res, Err(PurgeEmploymentError::NotFound)));
    }
}
