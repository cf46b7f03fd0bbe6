//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use tempfile::TempDir;

use pb_api::AppState;
use pb_core::repositories::{InMemoryContactRepository, InMemoryUserRepository};
use pb_infra::mail::MockMailService;
use pb_shared::config::{AppConfig, JwtConfig, StorageConfig};

pub const PASSWORD: &str = "secret-pass";

/// Application state over in-memory storage and the mock mail provider
pub struct TestContext {
    pub state: web::Data<AppState>,
    pub config: AppConfig,
    pub mail: Arc<MockMailService>,
    pub public_dir: TempDir,
}

pub fn context() -> TestContext {
    let public_dir = TempDir::new().expect("temp dir");

    let mut config = AppConfig::default();
    config.auth.jwt = JwtConfig::new("integration-test-secret");
    config.auth.password.bcrypt_cost = 4;
    config.server = config.server.with_base_url("http://localhost:3000");
    config.storage = StorageConfig::default().with_public_dir(public_dir.path());
    std::fs::create_dir_all(config.storage.avatars_path()).expect("avatars dir");

    let mail = Arc::new(MockMailService::new());
    let state = AppState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryContactRepository::new()),
        mail.clone(),
        &config,
    );

    TestContext {
        state: web::Data::new(state),
        config,
        mail,
        public_dir,
    }
}

/// `{"email", "password"}` body
pub fn credentials(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": PASSWORD })
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (
        actix_web::http::header::AUTHORIZATION,
        format!("Bearer {}", token),
    )
}

/// Register, verify through the mailed link and log in; evaluates to the token
macro_rules! sign_in {
    ($app:expr, $ctx:expr, $email:expr) => {{
        use actix_web::test;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(common::credentials($email))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);

        let token = $ctx.mail.last_verification_token().expect("verification mail");
        let req = test::TestRequest::get()
            .uri(&format!("/api/users/verify/{}", token))
            .to_request();
        assert_eq!(test::call_service(&$app, req).await.status(), 200);

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(common::credentials($email))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["token"].as_str().expect("token").to_string()
    }};
}
