use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::alumni::application::ports::outgoing::{AlumniPageQuery, SortOrder};
use crate::modules::alumni::application::use_cases::browse_alumni::BrowseAlumniError;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAlumniQuery {
    page: Option<u64>,
    limit: Option<u64>,
    sort: Option<String>,
    order: Option<String>,
    search: Option<String>,
}

/// Paginated profile listing
///
/// Defaults: page 1, 10 per page, sorted by `nama` ascending. `search`
/// matches name and major case-insensitively.
#[utoipa::path(
    get,
    path = "/api/alumni",
    tag = "alumni",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size"),
        ("sort" = Option<String>, Query, description = "Sort field (wire name)"),
        ("order" = Option<String>, Query, description = "asc or desc"),
        ("search" = Option<String>, Query, description = "Substring match on name and major"),
    ),
    responses(
        (status = 200, description = "One page of profiles"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/alumni")]
pub async fn list_alumni_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<ListAlumniQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page_query = AlumniPageQuery::new(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(10),
        query.sort.unwrap_or_else(|| "nama".to_string()),
        SortOrder::parse(query.order.as_deref().unwrap_or("asc")),
        query.search,
    );

    match data.browse_alumni_use_case.execute(page_query).await {
        Ok(page) => ApiResponse::success(page),
        Err(BrowseAlumniError::RepositoryError(msg)) => {
            error!("Failed to list alumni: {msg}");
            ApiResponse::internal_error()
        }
    }
}
