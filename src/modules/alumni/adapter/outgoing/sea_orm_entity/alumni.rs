use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alumni")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 20, unique)]
    pub nim: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub major: String,

    pub cohort_year: i32,

    pub graduation_year: i32,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub address: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::employment::adapter::outgoing::sea_orm_entity::employment::Entity"
    )]
    Employment,
}

impl Related<crate::modules::employment::adapter::outgoing::sea_orm_entity::employment::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Employment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
