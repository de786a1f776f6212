use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::alumni::application::use_cases::multi_job_alumni::MultiJobAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Alumni holding two or more employment records
#[utoipa::path(
    get,
    path = "/api/alumni/jumlah-pekerjaan",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Names with their record counts"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/alumni/jumlah-pekerjaan")]
pub async fn multi_job_alumni_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.multi_job_alumni_use_case.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(MultiJobAlumniError::RepositoryError(msg)) => {
            error!("Failed to aggregate employment counts: {msg}");
            ApiResponse::internal_error()
        }
    }
}
