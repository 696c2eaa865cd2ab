use actix_web::{web, HttpResponse};
use validator::Validate;

use realtor_core::repositories::UserRepository;
use realtor_core::services::auth::SigninParams;

use crate::dto::auth::{SigninRequest, TokenResponse};
use crate::handlers::error::{validation_error_response, ApiError};

use super::AppState;

/// Handler for POST /api/v1/auth/signin
///
/// Returns `200 { "token": ... }`, or `400 INVALID_CREDENTIALS` without
/// saying whether the email or the password was wrong.
pub async fn signin<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<SigninRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return Ok(validation_error_response(&errors));
    }

    let request = request.into_inner();
    let token = state
        .auth_service
        .signin(SigninParams {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
