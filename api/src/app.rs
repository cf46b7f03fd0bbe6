//! Application factory
//!
//! Builds the Actix-web application: middleware stack, route table, static
//! avatar files and the JSON 404 fallback.

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Condition, DefaultHeaders},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use pb_shared::config::AppConfig;
use pb_shared::types::response::{HealthResponse, HealthStatus};
use pb_shared::{error_codes, ErrorResponse};

use crate::middleware::cors::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&config.cors, config.environment);
    let avatars_dir = app_state.storage.avatars_path();
    let avatars_mount = format!("/{}", app_state.storage.avatars_dir.trim_matches('/'));

    App::new()
        .app_data(app_state)
        .app_data(web::PayloadConfig::new(config.server.max_payload_size))
        // Outermost last: logging sees every response, CORS runs before headers
        .wrap(
            DefaultHeaders::new()
                .add(("X-Content-Type-Options", "nosniff"))
                .add(("X-Frame-Options", "DENY"))
                .add(("Referrer-Policy", "no-referrer")),
        )
        .wrap(Condition::new(config.cors.enabled, cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(routes::users::configure)
        .configure(routes::contacts::configure)
        .service(Files::new(&avatars_mount, avatars_dir))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Reports 503 when the database does not answer.
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let backend = state.storage_backend();

    let healthy = match &state.database {
        Some(pool) => match pool.health_check().await {
            Ok(alive) => alive,
            Err(e) => {
                tracing::error!(error = %e, "Database health check failed");
                false
            }
        },
        None => true,
    };

    if healthy {
        HttpResponse::Ok().json(HealthResponse::new(HealthStatus::Healthy, backend))
    } else {
        HttpResponse::ServiceUnavailable().json(HealthResponse::new(HealthStatus::Unhealthy, backend))
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, "Not found"))
}
