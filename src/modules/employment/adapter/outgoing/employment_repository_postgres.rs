use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::employment::adapter::outgoing::sea_orm_entity::employment;
use crate::modules::employment::application::ports::outgoing::{
    EmploymentData, EmploymentRepository, EmploymentRepositoryError, EmploymentResult,
};
use crate::shared::db::with_store_timeout;

#[derive(Clone)]
pub struct EmploymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EmploymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EmploymentRepositoryError {
    EmploymentRepositoryError::DatabaseError(e.to_string())
}

fn timeout_err(e: crate::shared::db::StoreTimeout) -> EmploymentRepositoryError {
    EmploymentRepositoryError::DatabaseError(e.to_string())
}

pub(crate) fn to_result(model: employment::Model) -> EmploymentResult {
    EmploymentResult {
        id: model.id,
        alumni_id: model.alumni_id,
        company: model.company,
        position: model.position,
        industry: model.industry,
        location: model.location,
        salary_range: model.salary_range,
        start_date: model.start_date,
        end_date: model.end_date,
        status: model.status,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        deleted_at: model.deleted_at.map(|t| t.with_timezone(&Utc)),
        deleted_by: model.deleted_by,
    }
}

#[async_trait]
impl EmploymentRepository for EmploymentRepositoryPostgres {
    async fn find_active(&self) -> Result<Vec<EmploymentResult>, EmploymentRepositoryError> {
        let rows = with_store_timeout(
            employment::Entity::find()
                .filter(employment::Column::DeletedAt.is_null())
                .order_by_asc(employment::Column::CreatedAt)
                .all(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_result).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<EmploymentResult>, EmploymentRepositoryError> {
        let row = with_store_timeout(employment::Entity::find_by_id(id).one(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        Ok(row.map(to_result))
    }

    async fn find_by_alumni(
        &self,
        alumni_id: Uuid,
    ) -> Result<Vec<EmploymentResult>, EmploymentRepositoryError> {
        let rows = with_store_timeout(
            employment::Entity::find()
                .filter(employment::Column::AlumniId.eq(alumni_id))
                .all(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_result).collect())
    }

    async fn insert(
        &self,
        data: EmploymentData,
    ) -> Result<EmploymentResult, EmploymentRepositoryError> {
        let now = Utc::now();

        let model = employment::ActiveModel {
            id: Set(Uuid::new_v4()),
            alumni_id: Set(data.alumni_id),
            company: Set(data.company),
            position: Set(data.position),
            industry: Set(data.industry),
            location: Set(data.location),
            salary_range: Set(data.salary_range),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            status: Set(data.status),
            description: Set(data.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
            deleted_by: Set(None),
        };

        let inserted = with_store_timeout(model.insert(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        Ok(to_result(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: EmploymentData,
    ) -> Result<(), EmploymentRepositoryError> {
        // alumni_id deliberately not touched: ownership is fixed at creation.
        let res = with_store_timeout(
            employment::Entity::update_many()
                .col_expr(employment::Column::Company, Expr::value(data.company))
                .col_expr(employment::Column::Position, Expr::value(data.position))
                .col_expr(employment::Column::Industry, Expr::value(data.industry))
                .col_expr(employment::Column::Location, Expr::value(data.location))
                .col_expr(
                    employment::Column::SalaryRange,
                    Expr::value(data.salary_range),
                )
                .col_expr(employment::Column::StartDate, Expr::value(data.start_date))
                .col_expr(employment::Column::EndDate, Expr::value(data.end_date))
                .col_expr(employment::Column::Status, Expr::value(data.status))
                .col_expr(
                    employment::Column::Description,
                    Expr::value(data.description),
                )
                .col_expr(
                    employment::Column::UpdatedAt,
                    Expr::value(sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now())),
                )
                .filter(employment::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(EmploymentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), EmploymentRepositoryError> {
        let res = with_store_timeout(
            employment::Entity::delete_many()
                .filter(employment::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(EmploymentRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn active_row() -> employment::Model {
        let now = Utc::now();
        employment::Model {
            id: Uuid::new_v4(),
            alumni_id: Uuid::new_v4(),
            company: "PT Maju".to_string(),
            position: "Engineer".to_string(),
            industry: "Software".to_string(),
            location: "Jakarta".to_string(),
            salary_range: "8-12jt".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "".to_string(),
            status: "aktif".to_string(),
            description: "Backend work".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn find_active_maps_rows_without_marker() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active_row()]])
            .into_connection();
        let repo = EmploymentRepositoryPostgres::new(Arc::new(db));

        let rows = repo.find_active().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].deleted_at.is_none());
        assert!(rows[0].deleted_by.is_none());
    }

    #[tokio::test]
    async fn find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employment::Model>::new()])
            .into_connection();
        let repo = EmploymentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = EmploymentRepositoryPostgres::new(Arc::new(db));

        let data = EmploymentData {
            alumni_id: Uuid::new_v4(),
            company: "PT Maju".to_string(),
            position: "Engineer".to_string(),
            industry: "Software".to_string(),
            location: "Jakarta".to_string(),
            salary_range: "8-12jt".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "".to_string(),
            status: "aktif".to_string(),
            description: "Backend work".to_string(),
        };

        let res = repo.update(Uuid::new_v4(), data).await;
        assert!(matches!(res, Err(EmploymentRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_matched_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = EmploymentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
