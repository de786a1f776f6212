use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni;
use crate::modules::employment::adapter::outgoing::sea_orm_entity::employment;
use crate::modules::employment::application::domain::lifecycle::{is_trashed, TrashScope};
use crate::modules::employment::application::ports::outgoing::{
    EmploymentArchiver, EmploymentArchiverError, OwnershipStatus, TrashEntry,
};
use crate::shared::db::with_store_timeout;

#[derive(Clone)]
pub struct EmploymentArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl EmploymentArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EmploymentArchiverError {
    EmploymentArchiverError::DatabaseError(e.to_string())
}

fn timeout_err(e: crate::shared::db::StoreTimeout) -> EmploymentArchiverError {
    EmploymentArchiverError::DatabaseError(e.to_string())
}

/// Row shape of the trash listing query. The alumni name arrives through a
/// LEFT JOIN and may be missing for orphaned rows.
#[derive(Debug, FromQueryResult)]
struct TrashRow {
    id: Uuid,
    alumni_id: Uuid,
    alumni_name: Option<String>,
    company: String,
    position: String,
    industry: String,
    location: String,
    deleted_at: sea_orm::prelude::DateTimeWithTimeZone,
    deleted_by: Option<Uuid>,
}

/// Strongly-typed read model for the purge precondition lookup.
#[derive(Debug, FromQueryResult)]
struct OwnershipRow {
    alumni_id: Uuid,
    deleted_at: Option<sea_orm::prelude::DateTimeWithTimeZone>,
}

#[async_trait]
impl EmploymentArchiver for EmploymentArchiverPostgres {
    async fn soft_delete(&self, id: Uuid, actor: Uuid) -> Result<(), EmploymentArchiverError> {
        let now = sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now());

        let res = with_store_timeout(
            employment::Entity::update_many()
                .col_expr(employment::Column::DeletedAt, Expr::value(now))
                .col_expr(employment::Column::DeletedBy, Expr::value(actor))
                .filter(employment::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(EmploymentArchiverError::NotFound);
        }

        Ok(())
    }

    async fn restore(&self, id: Uuid) -> Result<(), EmploymentArchiverError> {
        // Both columns go back to NULL; the marker is unset, not set false.
        // No trashed-state filter: restoring an active record is a no-op
        // that still matches the row.
        let res = with_store_timeout(
            employment::Entity::update_many()
                .col_expr(
                    employment::Column::DeletedAt,
                    Expr::value(Option::<sea_orm::prelude::DateTimeWithTimeZone>::None),
                )
                .col_expr(
                    employment::Column::DeletedBy,
                    Expr::value(Option::<Uuid>::None),
                )
                .filter(employment::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(EmploymentArchiverError::NotFound);
        }

        Ok(())
    }

    async fn hard_delete(&self, id: Uuid) -> Result<(), EmploymentArchiverError> {
        let res = with_store_timeout(
            employment::Entity::delete_many()
                .filter(employment::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(EmploymentArchiverError::NotFound);
        }

        Ok(())
    }

    async fn trash_entries(
        &self,
        scope: TrashScope,
    ) -> Result<Vec<TrashEntry>, EmploymentArchiverError> {
        let mut query = employment::Entity::find()
            .select_only()
            .column(employment::Column::Id)
            .column(employment::Column::AlumniId)
            .column(employment::Column::Company)
            .column(employment::Column::Position)
            .column(employment::Column::Industry)
            .column(employment::Column::Location)
            .column(employment::Column::DeletedAt)
            .column(employment::Column::DeletedBy)
            .column_as(alumni::Column::Name, "alumni_name")
            .join(JoinType::LeftJoin, employment::Relation::Alumni.def())
            .filter(employment::Column::DeletedAt.is_not_null())
            .order_by_desc(employment::Column::DeletedAt);

        if let TrashScope::OwnedBy(owner) = scope {
            query = query.filter(employment::Column::AlumniId.eq(owner));
        }

        let rows = with_store_timeout(query.into_model::<TrashRow>().all(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| TrashEntry {
                id: row.id,
                alumni_id: row.alumni_id,
                alumni_name: row.alumni_name.unwrap_or_default(),
                company: row.company,
                position: row.position,
                industry: row.industry,
                location: row.location,
                deleted_at: row.deleted_at.with_timezone(&Utc),
                deleted_by: row.deleted_by,
            })
            .collect())
    }

    async fn owner_of(&self, id: Uuid) -> Result<Uuid, EmploymentArchiverError> {
        self.ownership_status(id).await.map(|status| status.owner)
    }

    async fn ownership_status(
        &self,
        id: Uuid,
    ) -> Result<OwnershipStatus, EmploymentArchiverError> {
        let row = with_store_timeout(
            employment::Entity::find_by_id(id)
                .select_only()
                .column(employment::Column::AlumniId)
                .column(employment::Column::DeletedAt)
                .into_model::<OwnershipRow>()
                .one(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?
        .ok_or(EmploymentArchiverError::NotFound)?;

        let deleted_at = row.deleted_at.map(|t| t.with_timezone(&Utc));

        Ok(OwnershipStatus {
            owner: row.alumni_id,
            trashed: is_trashed(deleted_at.as_ref()),
        })
    }
}
