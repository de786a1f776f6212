use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::application::use_cases::register_user::{
    RegisterError, RegisterRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "siti")]
    pub username: String,

    #[schema(example = "rahasia123")]
    pub password: String,
}

/// Register a new account
///
/// New accounts always get the `user` role.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Username already taken"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    body: web::Json<RegisterRequestDto>,
) -> impl Responder {
    let request = RegisterRequest {
        username: body.username.clone(),
        password: body.password.clone(),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(user) => ApiResponse::created(user),
        Err(RegisterError::UsernameTaken) => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already taken")
        }
        Err(RegisterError::HashingFailed(msg)) => {
            error!("Password hashing failed: {msg}");
            ApiResponse::internal_error()
        }
        Err(RegisterError::RepositoryError(msg)) => {
            error!("Repository error during registration: {msg}");
            ApiResponse::internal_error()
        }
    }
}
