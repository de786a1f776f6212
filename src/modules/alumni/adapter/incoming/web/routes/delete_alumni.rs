use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::alumni::application::use_cases::delete_alumni::DeleteAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedMessage {
    message: &'static str,
}

#[utoipa::path(
    delete,
    path = "/api/alumni/{id}",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile deleted"),
        (status = 400, description = "Malformed id"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No such alumni"),
    )
)]
#[delete("/api/alumni/{id}")]
pub async fn delete_alumni_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid alumni id"),
    };

    match data.delete_alumni_use_case.execute(id).await {
        Ok(()) => ApiResponse::success(DeletedMessage {
            message: "Alumni deleted",
        }),
        Err(DeleteAlumniError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Alumni not found"),
        Err(DeleteAlumniError::RepositoryError(msg)) => {
            error!("Failed to delete alumni {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
