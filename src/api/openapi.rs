use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{LoginRequestDto, RegisterRequestDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alumni Tracking API",
        version = "1.0.0",
        description = "API documentation for the alumni tracking backend",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::register_user::register_user_handler,

        // Alumni endpoints
        crate::modules::alumni::adapter::incoming::web::routes::list_alumni::list_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::get_alumni::get_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::create_alumni::create_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::update_alumni::update_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::delete_alumni::delete_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::cohort_counts::cohort_counts_handler,
        crate::modules::alumni::adapter::incoming::web::routes::multi_job_alumni::multi_job_alumni_handler,

        // Employment endpoints
        crate::modules::employment::adapter::incoming::web::routes::list_employment::list_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::list_own_employment::list_own_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::get_employment::get_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::create_employment::create_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::update_employment::update_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::delete_employment::delete_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::discard_employment::discard_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::list_trash::list_trash_handler,
        crate::modules::employment::adapter::incoming::web::routes::restore_employment::restore_employment_handler,
        crate::modules::employment::adapter::incoming::web::routes::purge_employment::purge_employment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            LoginRequestDto,
            RegisterRequestDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "alumni", description = "Alumni profile endpoints"),
        (name = "pekerjaan", description = "Employment record endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
