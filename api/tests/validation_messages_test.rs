//! Integration tests for request validation messages

#[macro_use]
mod common;

use actix_web::{http::header, test};
use pb_api::create_app;
use serde_json::{json, Value};

use common::{bearer, context};

#[actix_web::test]
async fn test_contact_body_messages() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");

    let cases = [
        (json!({}), "missing required 'name' field"),
        (json!({ "name": "Allen", "phone": "123" }), "missing required 'email' field"),
        (
            json!({ "name": "Allen", "email": "allen@mail", "phone": "123" }),
            "missing required 'email' field",
        ),
        (
            json!({ "name": "Allen", "email": "allen@mail.com", "phone": "12" }),
            "missing required 'phone' field",
        ),
        (
            json!({ "name": "Allen", "email": "allen@mail.com", "phone": "123", "age": 30 }),
            "missing required 'age' field",
        ),
    ];

    for (body, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .insert_header(bearer(&token))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_update_and_favorite_messages() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");
    let id = uuid::Uuid::new_v4();

    for body in [json!({}), json!({ "name": "Al" }), json!({ "favorite": true })] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/contacts/{}", id))
            .insert_header(bearer(&token))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "missing fields");
    }

    for body in [json!({}), json!({ "favorite": "maybe" }), json!({ "favorite": true, "x": 1 })] {
        let req = test::TestRequest::patch()
            .uri(&format!("/api/contacts/{}/favorite", id))
            .insert_header(bearer(&token))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "missing field favorite");
    }
}

#[actix_web::test]
async fn test_query_messages() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");

    for query in [
        "limit=51",
        "page=0",
        "page=abc",
        "favorite=yes",
        "sort=name",
        "page=abc&page=2",
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/contacts?{}", query))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "query {}", query);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Wrong query field");
    }
}

#[actix_web::test]
async fn test_auth_body_messages() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let cases = [
        ("/api/users/register", json!({ "password": "secret-pass" }), "missing required 'email' field"),
        ("/api/users/register", json!({ "email": "kate@mail.com" }), "missing required 'password' field"),
        ("/api/users/login", json!({ "email": "kate", "password": "secret-pass" }), "invalid 'email' field"),
        ("/api/users/login", json!({ "email": "kate@mail.com", "password": "12345" }), "invalid 'password' field"),
        ("/api/users/verify", json!({}), "missing required field email"),
    ];

    for (uri, body, message) in cases {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}
