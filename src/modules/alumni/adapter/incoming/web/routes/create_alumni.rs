use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::alumni::application::ports::outgoing::AlumniData;
use crate::modules::alumni::application::use_cases::create_alumni::CreateAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/alumni",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Profile created"),
        (status = 400, description = "Invalid body"),
        (status = 403, description = "Caller is not an admin"),
    )
)]
#[post("/api/alumni")]
pub async fn create_alumni_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<AlumniData>,
) -> impl Responder {
    match data.create_alumni_use_case.execute(body.into_inner()).await {
        Ok(alumni) => ApiResponse::created(alumni),
        Err(CreateAlumniError::RepositoryError(msg)) => {
            error!("Failed to create alumni: {msg}");
            ApiResponse::internal_error()
        }
    }
}
