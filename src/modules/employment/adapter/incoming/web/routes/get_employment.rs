use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::use_cases::get_employment::GetEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/pekerjaan/{id}",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employment record"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such record"),
    )
)]
#[get("/api/pekerjaan/{id}")]
pub async fn get_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid employment id"),
    };

    match data.get_employment_use_case.execute(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(GetEmploymentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Employment record not found")
        }
        Err(GetEmploymentError::RepositoryError(msg)) => {
            error!("Failed to fetch employment record {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
