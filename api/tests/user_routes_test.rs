//! HTTP tests for the `/v1/users` routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{bearer, read_json, seed_account, test_context, PASSWORD};
use ve_api::create_app;

#[actix_web::test]
async fn test_profile_requires_session() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/users/profile").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/v1/users/profile")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(resp).await["message"], "Token is invalid");
}

#[actix_web::test]
async fn test_get_and_update_profile() {
    let ctx = test_context();
    let account = seed_account(&ctx, "alice@example.com", true).await;
    let auth = bearer(&ctx, &account);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::get()
        .uri("/v1/users/profile")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert_eq!(body["data"]["is_verify"], true);
    assert!(body["data"].get("password").is_none());

    let req = test::TestRequest::put()
        .uri("/v1/users/profile")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"first_name": "Alicia", "description": "Gardener"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["first_name"], "Alicia");
    assert_eq!(body["data"]["description"], "Gardener");

    let stored = ctx.accounts.get(&account.user_identifier).await.unwrap();
    assert_eq!(stored.first_name, "Alicia");

    let req = test::TestRequest::put()
        .uri("/v1/users/profile")
        .insert_header(("Authorization", auth))
        .set_json(json!({"first_name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["message"], "first_name is required");
}

#[actix_web::test]
async fn test_update_password_checks_old_password() {
    let ctx = test_context();
    let account = seed_account(&ctx, "alice@example.com", true).await;
    let auth = bearer(&ctx, &account);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::put()
        .uri("/v1/users/update-password")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "old_password": "wrong",
            "new_password": "next-pass",
            "confirm_password": "next-pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["message"], "Old password is incorrect");

    let req = test::TestRequest::put()
        .uri("/v1/users/update-password")
        .insert_header(("Authorization", auth))
        .set_json(json!({
            "old_password": PASSWORD,
            "new_password": "next-pass",
            "confirm_password": "next-pass"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/v1/auths/login")
        .set_json(json!({"email": "alice@example.com", "password": "next-pass"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_address_book_lifecycle() {
    let ctx = test_context();
    let account = seed_account(&ctx, "alice@example.com", true).await;
    let auth = bearer(&ctx, &account);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::post()
        .uri("/v1/users/addresses")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"title": "Home", "full_address": "1 Main St"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let code = body["data"]["address_identifier"].as_str().unwrap().to_string();
    assert!(code.starts_with("USRADR"));
    assert_eq!(body["data"]["title"], "Home");

    let req = test::TestRequest::put()
        .uri(&format!("/v1/users/addresses/{}", code))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"full_address": "2 High St"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["data"]["full_address"], "2 High St");

    let req = test::TestRequest::get()
        .uri("/v1/users/addresses")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/users/addresses/{}", code))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/users/addresses/{}", code))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(resp).await["message"], "Data not found");

    let req = test::TestRequest::get()
        .uri("/v1/users/addresses")
        .insert_header(("Authorization", auth))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_addresses_are_scoped_to_the_session() {
    let ctx = test_context();
    let alice = seed_account(&ctx, "alice@example.com", true).await;
    let bob = seed_account(&ctx, "bob@example.com", true).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::post()
        .uri("/v1/users/addresses")
        .insert_header(("Authorization", bearer(&ctx, &alice)))
        .set_json(json!({"full_address": "1 Main St"}))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let code = body["data"]["address_identifier"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/users/addresses/{}", code))
        .insert_header(("Authorization", bearer(&ctx, &bob)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/users/addresses/{}", code))
        .insert_header(("Authorization", bearer(&ctx, &alice)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
