use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use realtor_api::app::{build_auth_service, create_app};
use realtor_api::routes::auth::AppState;
use realtor_api::telemetry::init_tracing;
use realtor_infra::database::{DatabasePool, MySqlUserRepository};
use realtor_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;
    config.validate()?;

    tracing::info!(environment = %config.environment, "Starting Realtor API server");

    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.run_migrations().await?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let auth_service = Arc::new(build_auth_service(user_repository, &config.auth));
    let app_state = web::Data::new(AppState::new(auth_service));

    let environment = config.environment;
    let server_config = config.server.clone();
    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), environment, &server_config).wrap(TracingLogger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    Ok(())
}
