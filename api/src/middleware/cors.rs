//! CORS middleware configuration for cross-origin requests.
//!
//! Outside production an empty origin list (or `*`) admits any origin.
//! Production only admits the configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pb_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given settings and environment.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.trim().as_bytes()).ok())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() && !environment.is_production() {
        tracing::info!("Configuring permissive CORS for {}", environment);
        return cors.allow_any_origin();
    }

    for origin in config.allowed_origins.iter().filter(|o| o.as_str() != "*") {
        tracing::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!("No CORS origins configured for {}, cross-origin requests are refused", environment);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, environment: Environment, origin: &str) -> u16 {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config, environment))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status().as_u16()
    }

    #[actix_rt::test]
    async fn development_admits_any_origin() {
        let status = preflight(
            CorsConfig::default(),
            Environment::Development,
            "http://anything.test",
        )
        .await;
        assert_eq!(status, 200);
    }

    #[actix_rt::test]
    async fn production_admits_configured_origin_only() {
        let config = CorsConfig::default().with_origin("https://phonebook.app");

        let allowed = preflight(config.clone(), Environment::Production, "https://phonebook.app").await;
        assert_eq!(allowed, 200);

        let refused = preflight(config, Environment::Production, "https://evil.test").await;
        assert_ne!(refused, 200);
    }
}
