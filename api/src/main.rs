use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pb_api::{create_app, AppState};
use pb_core::repositories::{InMemoryContactRepository, InMemoryUserRepository};
use pb_infra::database::{DatabasePool, MySqlContactRepository, MySqlUserRepository};
use pb_infra::mail::create_mail_service;
use pb_shared::config::{AppConfig, LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring layered configuration ({}), using environment only", e);
            AppConfig::from_env()
        }
    };

    init_tracing(&config.logging);
    info!(environment = %config.environment, "Starting phonebook API server");

    config.validate().context("invalid configuration")?;

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set, tokens are signed with the built-in development secret");
    }

    let mail_service = create_mail_service(&config.mail);
    info!(provider = mail_service.provider_name(), "Mail service ready");

    let state = if config.database.is_configured() {
        let pool = DatabasePool::new(&config.database)
            .await
            .context("failed to connect to the database")?;
        if config.database.run_schema {
            pool.ensure_schema()
                .await
                .context("failed to apply the database schema")?;
        }

        AppState::new(
            Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
            Arc::new(MySqlContactRepository::new(pool.get_pool().clone())),
            mail_service,
            &config,
        )
        .with_database(pool)
    } else {
        warn!("DATABASE_URL is not set, data is kept in memory only");
        AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryContactRepository::new()),
            mail_service,
            &config,
        )
    };

    let avatars_path = config.storage.avatars_path();
    std::fs::create_dir_all(&avatars_path)
        .with_context(|| format!("failed to create {}", avatars_path.display()))?;

    let state = web::Data::new(state);
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let app_state = state.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    if let Some(pool) = &state.database {
        let stats = pool.get_statistics();
        info!(
            connections = stats.connections,
            idle = stats.idle_connections,
            utilization = stats.utilization(),
            "Closing database pool"
        );
        pool.close().await;
    }

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
