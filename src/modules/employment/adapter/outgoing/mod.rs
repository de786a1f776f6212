pub mod employment_archiver_postgres;
pub mod employment_repository_postgres;
pub mod sea_orm_entity;
