use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::alumni::application::use_cases::cohort_counts::CohortCountsError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Headcount per cohort year
#[utoipa::path(
    get,
    path = "/api/alumni/jumlah-angkatan",
    tag = "alumni",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts ascending by cohort year"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/alumni/jumlah-angkatan")]
pub async fn cohort_counts_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cohort_counts_use_case.execute().await {
        Ok(counts) => ApiResponse::success(counts),
        Err(CohortCountsError::RepositoryError(msg)) => {
            error!("Failed to aggregate cohort counts: {msg}");
            ApiResponse::internal_error()
        }
    }
}
