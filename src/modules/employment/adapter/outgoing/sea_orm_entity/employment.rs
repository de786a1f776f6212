use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employment")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    /// Owning alumni; immutable after insert.
    #[sea_orm(column_name = "alumni_id", column_type = "Uuid")]
    pub alumni_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub company: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub position: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub industry: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub location: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub salary_range: String,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub start_date: String,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub end_date: String,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,

    // Lifecycle pair: NULL on active records, both set on trashed ones.
    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Entity",
        from = "Column::AlumniId",
        to = "crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Alumni,
}

impl Related<crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Alumni.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
