use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::employment::application::ports::outgoing::EmploymentData;
use crate::modules::employment::application::use_cases::create_employment::CreateEmploymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/pekerjaan",
    tag = "pekerjaan",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Record created"),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/pekerjaan")]
pub async fn create_employment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    body: web::Json<EmploymentData>,
) -> impl Responder {
    match data
        .create_employment_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::created(record),
        Err(CreateEmploymentError::RepositoryError(msg)) => {
            error!("Failed to create employment record: {msg}");
            ApiResponse::internal_error()
        }
    }
}
