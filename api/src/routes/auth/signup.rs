use actix_web::{web, HttpResponse};
use validator::Validate;

use realtor_core::domain::entities::user::UserType;
use realtor_core::errors::ValidationError;
use realtor_core::repositories::UserRepository;
use realtor_core::services::auth::SignupParams;
use realtor_shared::utils::validation::is_valid_phone;

use crate::dto::auth::{SignupRequest, TokenResponse};
use crate::handlers::error::{validation_error_response, ApiError};

use super::AppState;

/// Handler for POST /api/v1/auth/signup/{userType}
///
/// # Request Body
///
/// ```json
/// {
///     "email": "taro@example.com",
///     "password": "secret",
///     "name": "Taro",
///     "phone": "090-1234-5678",
///     "productKey": "$2b$10$..."
/// }
/// ```
///
/// `productKey` is required unless `userType` is `BUYER`.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body or unknown user type
/// - 401 Unauthorized: Missing or invalid product key
/// - 409 Conflict: Email already registered
pub async fn signup<U>(
    state: web::Data<AppState<U>>,
    path: web::Path<String>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    let raw_user_type = path.into_inner();
    let user_type = raw_user_type
        .parse::<UserType>()
        .map_err(|_| ValidationError::InvalidUserType {
            value: raw_user_type.clone(),
        })?;

    if let Err(errors) = request.validate() {
        tracing::debug!(?errors, "Signup request failed validation");
        return Ok(validation_error_response(&errors));
    }

    let request = request.into_inner();
    if !is_valid_phone(&request.phone) {
        return Err(ValidationError::InvalidPhone.into());
    }

    let params = SignupParams {
        email: request.email,
        password: request.password,
        name: request.name,
        phone: request.phone,
    };

    let token = state
        .auth_service
        .register(params, user_type, request.product_key.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(TokenResponse { token }))
}
