use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::delete_employment::DeleteEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedMessage {
    message: &'static str,
}

/// Plain delete
///
/// Removes the record outright, bypassing the trash lifecycle and its
/// ownership gate. The guarded variant lives at `/api/pekerjaan/hard/{id}`.
#[utoipa::path(
    delete,
    path = "/api/pekerjaan/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Record removed"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such record"),
    )
)]
#[delete("/api/pekerjaan/{id}")]
pub async fn delete_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data.delete_employment_use_case.execute(id).await {
        Ok(()) => ApiResponse::success(DeletedMessage {
            message: "Employment record deleted",
        }),
        Err(DeleteEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(DeleteEmploymentError::RepositoryError(msg)) => {
            error!("Failed to delete employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
