//! Application state and factory
//!
//! Builds the Actix-web application around an `AppState`, so the server
//! binary and the integration tests wire routes the same way.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;

use realtor_core::repositories::UserRepository;
use realtor_core::services::{AuthService, BcryptPasswordHasher, TokenService};
use realtor_shared::config::{AuthConfig, Environment, ServerConfig};

use crate::dto::error::{error_codes, ErrorResponse, ErrorResponseExt};
use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{
    me::me, product_key::generate_product_key, signin::signin, signup::signup, AppState,
};

/// Wire an `AuthService` over `user_repository` from the loaded settings
pub fn build_auth_service<U>(user_repository: Arc<U>, config: &AuthConfig) -> AuthService<U>
where
    U: UserRepository,
{
    AuthService::new(
        user_repository,
        Arc::new(BcryptPasswordHasher::new(config.password.cost)),
        Arc::new(TokenService::new(config.jwt.clone().into())),
        config.product_key.clone().into(),
    )
}

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    environment: Environment,
    server: &ServerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(app_state.auth_service.token_service()));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors(environment, server))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/signup/{user_type}", web::post().to(signup::<U>))
                    .route("/signin", web::post().to(signin::<U>))
                    .service(
                        web::resource("/key")
                            .wrap(jwt_auth.clone())
                            .route(web::post().to(generate_product_key::<U>)),
                    )
                    .service(
                        web::resource("/me")
                            .wrap(jwt_auth)
                            .route(web::get().to(me::<U>)),
                    ),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "realtor-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
