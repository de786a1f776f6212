use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employment::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employment::AlumniId).uuid().not_null())
                    .col(ColumnDef::new(Employment::Company).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Employment::Position)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employment::Industry)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employment::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employment::SalaryRange)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employment::StartDate)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employment::EndDate)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employment::Status).string_len(30).not_null())
                    .col(ColumnDef::new(Employment::Description).text().not_null())
                    .col(
                        ColumnDef::new(Employment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employment::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Lifecycle columns: NULL means the record is active.
                    .col(
                        ColumnDef::new(Employment::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Employment::DeletedBy).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employment_alumni")
                            .from(Employment::Table, Employment::AlumniId)
                            .to(Alumni::Table, Alumni::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Active listings and the trash query both filter on deleted_at,
        // trash additionally narrows by owner.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_employment_active
                ON employment (alumni_id)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_employment_trash
                ON employment (alumni_id)
                WHERE deleted_at IS NOT NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employment {
    Table,
    Id,
    AlumniId,
    Company,
    Position,
    Industry,
    Location,
    SalaryRange,
    StartDate,
    EndDate,
    Status,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}

#[derive(Iden)]
enum Alumni {
    Table,
    Id,
}
