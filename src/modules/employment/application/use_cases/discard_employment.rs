use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::CallerIdentity;
use crate::modules::employment::application::domain::lifecycle::may_discard;
use crate::modules::employment::application::ports::outgoing::{
    EmploymentArchiver, EmploymentArchiverError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DiscardEmploymentError {
    #[error("Employment record not found")]
    NotFound,

    #[error("Caller may not delete this record")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDiscardEmploymentUseCase: Send + Sync {
    /// Soft delete: marks the record trashed and records the acting caller.
    async fn execute(&self, id: Uuid, caller: CallerIdentity)
        -> Result<(), DiscardEmploymentError>;
}

pub struct DiscardEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    archiver: A,
}

impl<A> DiscardEmploymentUseCase<A>
where
    A: EmploymentArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> IDiscardEmploymentUseCase for DiscardEmploymentUseCase<A>
where
    A: EmploymentArchiver + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        caller: CallerIdentity,
    ) -> Result<(), DiscardEmploymentError> {
        let owner = self.archiver.owner_of(id).await.map_err(|e| match e {
            EmploymentArchiverError::NotFound => DiscardEmploymentError::NotFound,
            other => DiscardEmploymentError::RepositoryError(other.to_string()),
        })?;

        if !may_discard(&caller, owner) {
            return Err(DiscardEmploymentError::Forbidden);
        }

        self.archiver
            .soft_delete(id, caller.user_id)
            .await
            .map_err(|e| match e {
                EmploymentArchiverError::NotFound => DiscardEmploymentError::NotFound,
                other => DiscardEmploymentError::RepositoryError(other.to_string()),
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
        owner: Option<Uuid>,
        soft_deleted: Mutex<Option<(Uuid, Uuid)>>,
    }

    impl StubArchiver {
        fn owned_by(owner: Uuid) -> Self {
            Self {
                owner: Some(owner),
                soft_deleted: Mutex::new(None),
            }
        }

        fn missing() -> Self {
            Self {
                owner: None,
                soft_deleted: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl EmploymentArchiver for StubArchiver {
        async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<(), EmploymentArchiverError> {
            *self.soft_deleted.lock().unwrap() = Some((id, actor));
            Ok(())
        }

        async fn restore(&self, _id: Uuid) -> Result<(), EmploymentArchiverError> {
            unimplemented!("not used")
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
            self.owner.ok_or(EmploymentArchiverError::NotFound)
        }

        async fn ownership_status(
            &self,
            _id: Uuid,
        ) -> Result<OwnershipStatus, EmploymentArchiverError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn owner_may_soft_delete_and_is_recorded_as_actor() {
        let owner = Uuid::new_v4();
        let record = Uuid::new_v4();
        let archiver = StubArchiver::owned_by(owner);
        let caller = CallerIdentity::new(owner, Role::User);

        let uc = DiscardEmploymentUseCase::new(archiver);
        uc.execute(record, caller).await.unwrap();

        let logged = uc.archiver.soft_deleted.lock().unwrap().unwrap();
        assert_eq!(logged, (record, owner));
    }

    #[tokio::test]
    async fn admin_may_soft_delete_records_of_others() {
        let archiver = StubArchiver::owned_by(Uuid::new_v4());
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::Admin);

        let uc = DiscardEmploymentUseCase::new(archiver);
        assert!(uc.execute(Uuid::new_v4(), caller).await.is_ok());
    }

    #[tokio::test]
    async fn stranger_is_forbidden_and_nothing_is_written() {
        let archiver = StubArchiver::owned_by(Uuid::new_v4());
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::User);

        let uc = DiscardEmploymentUseCase::new(archiver);
        let res = uc.execute(Uuid::new_v4(), caller).await;

        assert!(matches!(res, Err(DiscardEmploymentError::Forbidden)));
        assert!(uc.archiver.soft_deleted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_record_is_not_found_before_authorization() {
        let archiver = StubArchiver::missing();
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::User);

        let uc = DiscardEmploymentUseCase::new(archiver);
        let res = uc.execute(Uuid::new_v4(), caller).await;

        assert!(matches!(res, Err(DiscardEmploymentError::NotFound)));
    }
}
