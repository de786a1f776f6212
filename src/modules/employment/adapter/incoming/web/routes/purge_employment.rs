use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::purge_employment::PurgeEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct PurgedMessage {
    message: &'static str,
}

/// Permanent delete
///
/// Removes a trashed record for good. The record must already be in the
/// trash; active records are rejected even for admins.
#[utoipa::path(
    delete,
    path = "/api/pekerjaan/hard/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Record permanently deleted"),
        (status = 400, description = "Malformed id or record not in trash"),
        (status = 403, description = "Caller does not own the record"),
        (status = 404, description = "No such record"),
    )
)]
#[delete("/api/pekerjaan/hard/{id}")]
pub async fn purge_employment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data
        .purge_employment_use_case
        .execute(id, user.identity)
        .await
    {
        Ok(()) => ApiResponse::success(PurgedMessage {
            message: "Employment record permanently deleted",
        }),
        Err(PurgeEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(PurgeEmploymentError::NotTrashed) => {
            ApiResponse::bad_request("NOT_TRASHED", "Record has not been soft-deleted yet")
        }
        Err(PurgeEmploymentError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to permanently delete this record",
        ),
        Err(PurgeEmploymentError::RepositoryError(msg)) => {
            error!("Failed to purge employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
