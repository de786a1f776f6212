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

pub use create_employment::create_employment_handler;
pub use delete_employment::delete_employment_handler;
pub use discard_employment::discard_employment_handler;
pub use get_employment::get_employment_handler;
pub use list_employment::list_employment_handler;
pub use list_own_employment::list_own_employment_handler;
pub use list_trash::list_trash_handler;
pub use purge_employment::purge_employment_handler;
pub use restore_employment::restore_employment_handler;
pub use update_employment::update_employment_handler;
