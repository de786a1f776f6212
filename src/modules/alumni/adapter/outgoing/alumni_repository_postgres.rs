use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, ExprTrait},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use sea_orm::FromQueryResult;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni;
use crate::modules::alumni::application::ports::outgoing::{
    AlumniData, AlumniJobCount, AlumniPage, AlumniPageQuery, AlumniRepository,
    AlumniRepositoryError, AlumniResult, CohortCount, SortOrder,
};
use crate::modules::employment::adapter::outgoing::sea_orm_entity::employment;
use crate::shared::db::with_store_timeout;

#[derive(Clone)]
pub struct AlumniRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AlumniRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AlumniRepositoryError {
    AlumniRepositoryError::DatabaseError(e.to_string())
}

fn timeout_err(e: crate::shared::db::StoreTimeout) -> AlumniRepositoryError {
    AlumniRepositoryError::DatabaseError(e.to_string())
}

fn to_result(model: alumni::Model) -> AlumniResult {
    AlumniResult {
        id: model.id,
        nim: model.nim,
        name: model.name,
        major: model.major,
        cohort_year: model.cohort_year,
        graduation_year: model.graduation_year,
        email: model.email,
        phone: model.phone,
        address: model.address,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Maps a wire-name sort key to its column. Unknown keys sort by name, the
/// same default the listing uses when no key is given.
fn sort_column(wire_name: &str) -> alumni::Column {
    match wire_name {
        "nim" => alumni::Column::Nim,
        "nama" => alumni::Column::Name,
        "jurusan" => alumni::Column::Major,
        "angkatan" => alumni::Column::CohortYear,
        "tahun_lulus" => alumni::Column::GraduationYear,
        "email" => alumni::Column::Email,
        _ => alumni::Column::Name,
    }
}

#[derive(Debug, FromQueryResult)]
struct CohortRow {
    cohort_year: i32,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct JobCountRow {
    name: String,
    job_count: i64,
}

#[async_trait]
impl AlumniRepository for AlumniRepositoryPostgres {
    async fn find_page(
        &self,
        query: AlumniPageQuery,
    ) -> Result<AlumniPage, AlumniRepositoryError> {
        let mut find = alumni::Entity::find();

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            find = find.filter(
                Condition::any()
                    .add(Expr::col(alumni::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(alumni::Column::Major).ilike(pattern)),
            );
        }

        let column = sort_column(&query.sort_by);
        find = match query.order {
            SortOrder::Asc => find.order_by_asc(column),
            SortOrder::Desc => find.order_by_desc(column),
        };

        // Count first so the total reflects the same filter as the page.
        let total = with_store_timeout(find.clone().count(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        let rows = with_store_timeout(
            find.limit(query.limit)
                .offset((query.page - 1) * query.limit)
                .all(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(query.limit)
        };

        Ok(AlumniPage {
            page: query.page,
            limit: query.limit,
            total,
            total_pages,
            data: rows.into_iter().map(to_result).collect(),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AlumniResult>, AlumniRepositoryError> {
        let row = with_store_timeout(alumni::Entity::find_by_id(id).one(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        Ok(row.map(to_result))
    }

    async fn insert(&self, data: AlumniData) -> Result<AlumniResult, AlumniRepositoryError> {
        let now = Utc::now();

        let model = alumni::ActiveModel {
            id: Set(Uuid::new_v4()),
            nim: Set(data.nim),
            name: Set(data.name),
            major: Set(data.major),
            cohort_year: Set(data.cohort_year),
            graduation_year: Set(data.graduation_year),
            email: Set(data.email),
            phone: Set(data.phone),
            address: Set(data.address),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = with_store_timeout(model.insert(&*self.db))
            .await
            .map_err(timeout_err)?
            .map_err(map_db_err)?;

        Ok(to_result(inserted))
    }

    async fn update(&self, id: Uuid, data: AlumniData) -> Result<(), AlumniRepositoryError> {
        // nim and email are fixed at creation and never rewritten here.
        let res = with_store_timeout(
            alumni::Entity::update_many()
                .col_expr(alumni::Column::Name, Expr::value(data.name))
                .col_expr(alumni::Column::Major, Expr::value(data.major))
                .col_expr(alumni::Column::CohortYear, Expr::value(data.cohort_year))
                .col_expr(
                    alumni::Column::GraduationYear,
                    Expr::value(data.graduation_year),
                )
                .col_expr(alumni::Column::Phone, Expr::value(data.phone))
                .col_expr(alumni::Column::Address, Expr::value(data.address))
                .col_expr(
                    alumni::Column::UpdatedAt,
                    Expr::value(sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now())),
                )
                .filter(alumni::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(AlumniRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError> {
        let res = with_store_timeout(
            alumni::Entity::delete_many()
                .filter(alumni::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(AlumniRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn cohort_counts(&self) -> Result<Vec<CohortCount>, AlumniRepositoryError> {
        let rows = with_store_timeout(
            alumni::Entity::find()
                .select_only()
                .column(alumni::Column::CohortYear)
                .column_as(alumni::Column::Id.count(), "count")
                .group_by(alumni::Column::CohortYear)
                .order_by_asc(alumni::Column::CohortYear)
                .into_model::<CohortRow>()
                .all(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| CohortCount {
                cohort_year: row.cohort_year,
                count: row.count,
            })
            .collect())
    }

    async fn multi_job_alumni(&self) -> Result<Vec<AlumniJobCount>, AlumniRepositoryError> {
        // Counts over every employment row, trashed included; the original
        // report ignored the deletion marker.
        let rows = with_store_timeout(
            employment::Entity::find()
                .select_only()
                .column_as(alumni::Column::Name, "name")
                .column_as(employment::Column::Id.count(), "job_count")
                .join(JoinType::InnerJoin, employment::Relation::Alumni.def())
                .group_by(employment::Column::AlumniId)
                .group_by(alumni::Column::Name)
                .having(Expr::expr(employment::Column::Id.count()).gte(2))
                .into_model::<JobCountRow>()
                .all(&*self.db),
        )
        .await
        .map_err(timeout_err)?
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| AlumniJobCount {
                name: row.name,
                job_count: row.job_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    fn sample_model(id: Uuid) -> alumni::Model {
        let now = sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now());
        alumni::Model {
            id,
            nim: "1915016000".into(),
            name: "Budi Santoso".into(),
            major: "Informatika".into(),
            cohort_year: 2019,
            graduation_year: 2023,
            email: "budi@example.com".into(),
            phone: "0812000111".into(),
            address: "Samarinda".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_page_reports_totals_for_the_filtered_set() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![btreemap! {
                "num_items" => Value::from(11i64),
            }]])
            .append_query_results([vec![sample_model(id)]])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        let page = repo
            .find_page(AlumniPageQuery::new(
                2,
                10,
                "nama".into(),
                SortOrder::Asc,
                Some("budi".into()),
            ))
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, id);
    }

    #[tokio::test]
    async fn find_page_of_empty_set_has_zero_pages() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![btreemap! {
                "num_items" => Value::from(0i64),
            }]])
            .append_query_results([Vec::<alumni::Model>::new()])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        let page = repo
            .find_page(AlumniPageQuery::new(
                1,
                10,
                "nama".into(),
                SortOrder::Asc,
                None,
            ))
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn update_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        let data = AlumniData {
            nim: "x".into(),
            name: "x".into(),
            major: "x".into(),
            cohort_year: 2020,
            graduation_year: 2024,
            email: "x@example.com".into(),
            phone: "x".into(),
            address: "x".into(),
        };
        let res = repo.update(Uuid::new_v4(), data).await;
        assert!(matches!(res, Err(AlumniRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_matched_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn cohort_counts_map_aggregate_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                btreemap! {
                    "cohort_year" => Value::from(2019i32),
                    "count" => Value::from(7i64),
                },
                btreemap! {
                    "cohort_year" => Value::from(2020i32),
                    "count" => Value::from(3i64),
                },
            ]])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        let counts = repo.cohort_counts().await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].cohort_year, 2019);
        assert_eq!(counts[0].count, 7);
    }

    #[tokio::test]
    async fn multi_job_alumni_map_join_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![btreemap! {
                "name" => Value::from("Budi Santoso".to_string()),
                "job_count" => Value::from(2i64),
            }]])
            .into_connection();
        let repo = AlumniRepositoryPostgres::new(Arc::new(db));

        let rows = repo.multi_job_alumni().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Budi Santoso");
        assert_eq!(rows[0].job_count, 2);
    }
}
