use actix_web::{web, HttpResponse};
use validator::Validate;

use realtor_core::repositories::UserRepository;

use crate::dto::auth::{GenerateProductKeyRequest, ProductKeyResponse};
use crate::handlers::error::{validation_error_response, ApiError};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/auth/key
///
/// Requires a bearer token for an `ADMIN` account.
///
/// # Request Body
///
/// ```json
/// { "email": "seller@example.com", "userType": "SELLER" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "productKey": "$2b$10$..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 403 Forbidden: Caller is not an admin
pub async fn generate_product_key<U>(
    state: web::Data<AppState<U>>,
    auth: AuthContext,
    request: web::Json<GenerateProductKeyRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    state.auth_service.require_admin(auth.user_id).await?;

    if let Err(errors) = request.validate() {
        return Ok(validation_error_response(&errors));
    }

    let product_key = state
        .auth_service
        .generate_product_key(&request.email, request.user_type)
        .await?;

    tracing::info!(
        admin_id = auth.user_id,
        user_type = %request.user_type,
        "Product key issued"
    );

    Ok(HttpResponse::Ok().json(ProductKeyResponse { product_key }))
}
