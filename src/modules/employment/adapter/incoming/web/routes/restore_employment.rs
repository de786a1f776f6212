use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::restore_employment::RestoreEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct RestoredMessage {
    message: &'static str,
}

/// Restore from trash
///
/// Clears the deletion marker. Any authenticated caller may restore any
/// record; see the authorization notes in the repository docs.
#[utoipa::path(
    put,
    path = "/api/pekerjaan/restore/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Record restored"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such record"),
    )
)]
#[put("/api/pekerjaan/restore/{id}")]
pub async fn restore_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data.restore_employment_use_case.execute(id).await {
        Ok(()) => ApiResponse::success(RestoredMessage {
            message: "Employment record restored",
        }),
        Err(RestoreEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(RestoreEmploymentError::RepositoryError(msg)) => {
            error!("Failed to restore employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
