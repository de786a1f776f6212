use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::alumni::application::use_cases::get_alumni::GetAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/alumni/{id}",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The profile"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such alumni"),
    )
)]
#[get("/api/alumni/{id}")]
pub async fn get_alumni_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Invalid alumni id"),
    };

    match data.get_alumni_use_case.execute(id).await {
        Ok(alumni) => ApiResponse::success(alumni),
        Err(GetAlumniError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Alumni not found"),
        Err(GetAlumniError::RepositoryError(msg)) => {
            error!("Failed to fetch alumni {id}: {msg}");
            ApiResponse::internal_error()
        }
    }
}
