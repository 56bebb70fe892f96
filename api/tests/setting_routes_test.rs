//! HTTP tests for the `/v1/settings` routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, read_json, seed_account, test_context};
use ve_api::create_app;

fn setting(key: &str, label: &str, order: i32) -> Value {
    json!({
        "set_group": "appearance",
        "set_key": key,
        "set_label": label,
        "set_order": order,
        "content_type": "string",
        "content_value": format!("{}-value", key),
        "is_active": true
    })
}

#[actix_web::test]
async fn test_add_requires_session() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::post()
        .uri("/v1/settings")
        .set_json(setting("theme", "Theme", 1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Reads stay public
    let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/settings").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_add_list_and_update() {
    let ctx = test_context();
    let account = seed_account(&ctx, "admin@example.com", true).await;
    let auth = bearer(&ctx, &account);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let mut codes = Vec::new();
    for (key, label, order) in [("theme", "Theme", 2), ("locale", "Locale", 1), ("banner", "Banner", 3)] {
        let req = test::TestRequest::post()
            .uri("/v1/settings")
            .insert_header(("Authorization", auth.clone()))
            .set_json(setting(key, label, order))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        let code = body["data"]["setting_code"].as_str().unwrap().to_string();
        assert!(code.starts_with("SET-"));
        codes.push(code);
    }

    let req = test::TestRequest::get().uri("/v1/settings?limit=2").to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["total_pages"], 2);
    let keys: Vec<_> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["set_key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["locale", "theme"]);

    let req = test::TestRequest::get()
        .uri("/v1/settings?keyword=BANNER&order=set_label&sort=desc")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["set_key"], "banner");

    let req = test::TestRequest::put()
        .uri(&format!("/v1/settings/{}", codes[0]))
        .insert_header(("Authorization", auth))
        .set_json(json!({
            "set_key": "theme",
            "set_label": "Colour theme",
            "set_order": 2,
            "content_value": "dark",
            "is_active": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["set_label"], "Colour theme");
    assert_eq!(body["data"]["content_type"], "string");
    assert_eq!(body["data"]["is_active"], false);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/settings/{}", codes[0]))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["content_value"], "dark");
}

#[actix_web::test]
async fn test_add_rejects_unknown_content_type() {
    let ctx = test_context();
    let account = seed_account(&ctx, "admin@example.com", true).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let mut body = setting("theme", "Theme", 1);
    body["content_type"] = json!("xml");
    let req = test::TestRequest::post()
        .uri("/v1/settings")
        .insert_header(("Authorization", bearer(&ctx, &account)))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(resp).await["message"],
        "wrong content type value for settings(json_arr|json_obj|bool|string)"
    );
}

#[actix_web::test]
async fn test_unknown_setting_code() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::get().uri("/v1/settings/SET-missing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(resp).await["message"], "Data not found");
}

#[actix_web::test]
async fn test_list_with_huge_page_on_empty_table() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.cors)).await;

    let req = test::TestRequest::get()
        .uri("/v1/settings?page=4294967295&limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["page"], 4294967295u64);
    assert!(body["data"]["data"].as_array().unwrap().is_empty());
}
