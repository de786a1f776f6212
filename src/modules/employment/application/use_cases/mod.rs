pub mod create_employment;
pub mod delete_employment;
pub mod discard_employment;
pub mod get_employment;
pub mod list_employment;
pub mod list_own_employment;
pub mod list_trash;
pub mod purge_employment;
pub mod restore_employment;
pub mod update_employment;
