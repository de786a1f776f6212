use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::list_trash::ListTrashError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the trash
///
/// Admins see every trashed record; other callers only their own. An empty
/// trash is reported as a not-found condition, matching the historical API.
#[utoipa::path(
    get,
    path = "/api/pekerjaan/trash",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Trashed records visible to the caller"),
        (status = 404, description = "Nothing in the trash"),
    )
)]
#[get("/api/pekerjaan/trash")]
pub async fn list_trash_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_trash_use_case.execute(user.identity).await {
        Ok(entries) if entries.is_empty() => {
            ApiResponse::not_found("TRASH_EMPTY", "No deleted employment records found")
        }
        Ok(entries) => ApiResponse::success(entries),
        Err(ListTrashError::RepositoryError(msg)) => {
            error!("Failed to list trashed employment records: {msg}");
            ApiResponse::internal_error()
        }
    }
}
