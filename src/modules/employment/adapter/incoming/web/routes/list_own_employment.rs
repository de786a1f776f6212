use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::list_own_employment::ListOwnEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's own employment records
#[utoipa::path(
    get,
    path = "/api/pekerjaan/alumni",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Records owned by the caller"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/pekerjaan/alumni")]
pub async fn list_own_employment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_own_employment_use_case
        .execute(user.identity)
        .await
    {
        Ok(records) => ApiResponse::success(records),
        Err(ListOwnEmploymentError::RepositoryError(msg)) => {
            error!("Failed to list caller's employment records: {msg}");
            ApiResponse::internal_error()
        }
    }
}
