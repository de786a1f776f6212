use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::discard_employment::DiscardEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DiscardedMessage {
    message: &'static str,
}

/// Soft delete
///
/// Moves the record to the trash. Admins may trash any record, other
/// callers only their own.
#[utoipa::path(
    delete,
    path = "/api/pekerjaan/rbac/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Record moved to trash"),
        (status = 400, description = "Malformed id"),
        (status = 403, description = "Caller does not own the record"),
        (status = 404, description = "No such record"),
    )
)]
#[delete("/api/pekerjaan/rbac/{id}")]
pub async fn discard_employment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data
        .discard_employment_use_case
        .execute(id, user.identity)
        .await
    {
        Ok(()) => ApiResponse::success(DiscardedMessage {
            message: "Employment record moved to trash",
        }),
        Err(DiscardEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(DiscardEmploymentError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to delete this record",
        ),
        Err(DiscardEmploymentError::RepositoryError(msg)) => {
            error!("Failed to soft-delete employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
