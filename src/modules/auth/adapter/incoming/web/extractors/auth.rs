use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::CallerIdentity;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// An authenticated caller, resolved from the Bearer token. A missing or
/// unverifiable identity fails the request with 401; it never falls through
/// as an anonymous caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub identity: CallerIdentity,
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                identity: CallerIdentity::new(claims.sub, claims.role),
                username: claims.username,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// An authenticated caller holding the admin role. Non-admins get 403,
/// the role-middleware analogue for admin-only routes.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub identity: CallerIdentity,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_future = AuthenticatedUser::from_request(req, payload);

        match auth_future.into_inner() {
            Ok(user) => {
                if !user.identity.is_admin() {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "ROLE_NOT_ALLOWED",
                        "Forbidden: role not allowed",
                    ))));
                }

                ready(Ok(AdminUser {
                    identity: user.identity,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::domain::entities::Role;
    use actix_web::{test, web};
    use uuid::Uuid;

    fn token_provider() -> (Arc<dyn TokenProvider>, JwtTokenService) {
        let svc = JwtTokenService::new(JwtConfig {
            secret_key: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "test".to_string(),
            token_expiry: 7200,
        });
        (Arc::new(svc.clone()), svc)
    }

    #[actix_web::test]
    async fn bearer_token_resolves_caller_identity() {
        let (provider, svc) = token_provider();
        let id = Uuid::new_v4();
        let token = svc.issue_token(id, "budi", Role::User).unwrap();

        let req = test::TestRequest::default()
            .app_data(web::Data::new(provider))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request();

        let user = AuthenticatedUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(user.identity.user_id, id);
        assert_eq!(user.identity.role, Role::User);
        assert_eq!(user.username, "budi");
    }

    #[actix_web::test]
    async fn missing_header_is_rejected() {
        let (provider, _svc) = token_provider();

        let req = test::TestRequest::default()
            .app_data(web::Data::new(provider))
            .to_http_request();

        let res = AuthenticatedUser::from_request(&req, &mut Payload::None).await;
        assert!(res.is_err());
    }

    #[actix_web::test]
    async fn admin_extractor_rejects_plain_users() {
        let (provider, svc) = token_provider();
        let token = svc
            .issue_token(Uuid::new_v4(), "budi", Role::User)
            .unwrap();

        let req = test::TestRequest::default()
            .app_data(web::Data::new(provider))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request();

        let res = AdminUser::from_request(&req, &mut Payload::None).await;
        assert!(res.is_err());
    }

    #[actix_web::test]
    async fn admin_extractor_accepts_admins() {
        let (provider, svc) = token_provider();
        let token = svc
            .issue_token(Uuid::new_v4(), "root", Role::Admin)
            .unwrap();

        let req = test::TestRequest::default()
            .app_data(web::Data::new(provider))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request();

        let res = AdminUser::from_request(&req, &mut Payload::None).await;
        assert!(res.is_ok());
    }
}
