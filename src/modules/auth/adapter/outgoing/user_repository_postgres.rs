use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::shared::db::with_store_timeout;

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn to_domain(model: users::Model) -> Result<User, UserRepositoryError> {
    let role = Role::parse(&model.role).ok_or_else(|| {
        UserRepositoryError::DatabaseError(format!("unknown role '{}' on user row", model.role))
    })?;

    Ok(User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        role,
    })
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = with_store_timeout(
            users::Entity::find()
                .filter(users::Column::Username.eq(username))
                .one(&*self.db),
        )
        .await
        .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
        .map_err(map_db_err)?;

        found.map(to_domain).transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
        };

        let inserted = with_store_timeout(model.insert(&*self.db))
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map_err(|e| {
                // Unique violation on username surfaces as a DbErr; report
                // it as the taken-username condition.
                if e.to_string().contains("unique") || e.to_string().contains("duplicate") {
                    UserRepositoryError::UsernameTaken
                } else {
                    map_db_err(e)
                }
            })?;

        to_domain(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_row(role: &str) -> users::Model {
        users::Model {
            id: Uuid::new_v4(),
            username: "budi".to_string(),
            password_hash: "$2b$12$abc".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn find_by_username_maps_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_row("admin")]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let user = repo.find_by_username("budi").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.username, "budi");
    }

    #[tokio::test]
    async fn find_by_username_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let user = repo.find_by_username("nobody").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn unknown_role_on_row_is_a_store_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_row("superuser")]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let res = repo.find_by_username("budi").await;
        assert!(matches!(res, Err(UserRepositoryError::DatabaseError(_))));
    }
}
