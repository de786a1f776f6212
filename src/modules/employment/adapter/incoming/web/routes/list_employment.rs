use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::list_employment::ListEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List active employment records
///
/// Trashed records are excluded; any authenticated caller sees the full set.
#[utoipa::path(
    get,
    path = "/api/pekerjaan",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active employment records"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/pekerjaan")]
pub async fn list_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_employment_use_case.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(ListEmploymentError::RepositoryError(msg)) => {
            error!("Failed to list employment records: {msg}");
            ApiResponse::internal_error()
        }
    }
}
