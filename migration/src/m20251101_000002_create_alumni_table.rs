use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alumni::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alumni::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Alumni::Nim)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alumni::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Alumni::Major).string_len(100).not_null())
                    .col(ColumnDef::new(Alumni::CohortYear).integer().not_null())
                    .col(ColumnDef::new(Alumni::GraduationYear).integer().not_null())
                    .col(ColumnDef::new(Alumni::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Alumni::Phone).string_len(30).not_null())
                    .col(ColumnDef::new(Alumni::Address).text().not_null())
                    .col(
                        ColumnDef::new(Alumni::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alumni::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Cohort aggregation groups on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_alumni_cohort_year")
                    .table(Alumni::Table)
                    .col(Alumni::CohortYear)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alumni::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Alumni {
    Table,
    Id,
    Nim,
    Name,
    Major,
    CohortYear,
    GraduationYear,
    Email,
    Phone,
    Address,
    CreatedAt,
    UpdatedAt,
}
