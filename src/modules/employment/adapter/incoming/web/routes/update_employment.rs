use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::ports::outgoing::EmploymentData;
use crate::modules::employment::application::use_cases::update_employment::UpdateEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct UpdatedMessage {
    message: &'static str,
}

#[utoipa::path(
    put,
    path = "/api/pekerjaan/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Record updated"),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "No such record"),
    )
)]
#[put("/api/pekerjaan/{id}")]
pub async fn update_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<EmploymentData>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data
        .update_employment_use_case
        .execute(id, body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(UpdatedMessage {
            message: "Employment record updated",
        }),
        Err(UpdateEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(UpdateEmploymentError::RepositoryError(msg)) => {
            error!("Failed to update employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
