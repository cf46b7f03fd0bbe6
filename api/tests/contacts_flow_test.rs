//! Integration tests for the contact endpoints

#[macro_use]
mod common;

use actix_web::test;
use pb_api::create_app;
use serde_json::{json, Value};

use common::{bearer, context};

fn contact(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@mail.com", name.to_lowercase()),
        "phone": "(067) 123-45-67"
    })
}

#[actix_web::test]
async fn test_contact_crud() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .insert_header(bearer(&token))
        .set_json(contact("Allen"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Allen");
    assert_eq!(created["favorite"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::put()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "phone": "555 01 02" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["phone"], "555 01 02");
    assert_eq!(updated["name"], "Allen");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/contacts/{}/favorite", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "favorite": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let favorite: Value = test::read_body_json(resp).await;
    assert_eq!(favorite["favorite"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "contact deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not found");
}

#[actix_web::test]
async fn test_list_paginates_and_filters() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");

    let mut ids = Vec::new();
    for name in ["Allen", "Betty", "Chaim", "Dolly", "Emmet"] {
        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .insert_header(bearer(&token))
            .set_json(contact(name))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    for id in &ids[..2] {
        let req = test::TestRequest::patch()
            .uri(&format!("/api/contacts/{}/favorite", id))
            .insert_header(bearer(&token))
            .set_json(json!({ "favorite": true }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }

    let req = test::TestRequest::get()
        .uri("/api/contacts?page=2&limit=2")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total"], 5);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["page"], 2);
    assert_eq!(page["has_next"], true);
    assert_eq!(page["has_prev"], true);
    let names: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chaim", "Dolly"]);

    let req = test::TestRequest::get()
        .uri("/api/contacts?favorite=true")
        .insert_header(bearer(&token))
        .to_request();
    let page: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(page["total"], 2);
    assert!(page["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["favorite"] == true));
}

#[actix_web::test]
async fn test_contacts_are_private_to_owner() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let kate = sign_in!(app, ctx, "kate@mail.com");
    let mike = sign_in!(app, ctx, "mike@mail.com");

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .insert_header(bearer(&kate))
        .set_json(contact("Allen"))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&mike))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/contacts/{}", id))
        .insert_header(bearer(&mike))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header(bearer(&mike))
        .to_request();
    let page: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(page["total"], 0);
}

#[actix_web::test]
async fn test_malformed_id_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = sign_in!(app, ctx, "kate@mail.com");

    let req = test::TestRequest::get()
        .uri("/api/contacts/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
