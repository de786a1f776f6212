use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::alumni::application::ports::outgoing::AlumniData;
use crate::modules::alumni::application::use_cases::update_alumni::UpdateAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct UpdatedMessage {
    message: &'static str,
}

#[utoipa::path(
    put,
    path = "/api/alumni/{id}",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Malformed id or invalid body"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No such alumni"),
    )
)]
#[put("/api/alumni/{id}")]
pub async fn update_alumni_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AlumniData>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid alumni id"),
    };

    match data
        .update_alumni_use_case
        .execute(id, body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(UpdatedMessage {
            message: "Alumni updated",
        }),
        Err(UpdateAlumniError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Alumni not found"),
        Err(UpdateAlumniError::RepositoryError(msg)) => {
            error!("Failed to update alumni {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
