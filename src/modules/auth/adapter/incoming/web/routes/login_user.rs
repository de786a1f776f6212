use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "budi")]
    pub username: String,

    #[schema(example = "rahasia123")]
    pub password: String,
}

/// User login
///
/// Exchanges credentials for a signed, time-boxed identity token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Unknown user or wrong password"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    body: web::Json<LoginRequestDto>,
) -> impl Responder {
    let request = LoginRequest {
        username: body.username.clone(),
        password: body.password.clone(),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(LoginError::TokenGenerationFailed(msg)) => {
            error!("Token generation failed: {msg}");
            ApiResponse::internal_error()
        }
        Err(LoginError::VerificationFailed(msg)) => {
            error!("Password verification failed: {msg}");
            ApiResponse::internal_error()
        }
        Err(LoginError::RepositoryError(msg)) => {
            error!("Repository error during login: {msg}");
            ApiResponse::internal_error()
        }
    }
}
