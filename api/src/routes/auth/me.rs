use actix_web::{web, HttpResponse};

use realtor_core::errors::AuthError;
use realtor_core::repositories::UserRepository;

use crate::dto::auth::MeResponse;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Profile of the account behind the bearer token.
pub async fn me<U>(
    state: web::Data<AppState<U>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    let user = state
        .auth_service
        .find_user(auth.user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(HttpResponse::Ok().json(MeResponse::from(user)))
}
