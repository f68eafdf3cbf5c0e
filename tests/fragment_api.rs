// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

#[actix_web::test]
async fn create_fragment_returns_created_record() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_json(json!({ "text": "Write a haiku about rust" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = test::read_body(resp).await;
    let fragment: Value = serde_json::from_slice(&body).expect("fragment json");
    assert_eq!(fragment.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        fragment.get("text").and_then(Value::as_str),
        Some("Write a haiku about rust")
    );
    let created_at = fragment
        .get("created_at")
        .and_then(Value::as_str)
        .expect("created_at string");
    assert!(!created_at.is_empty());
}

#[actix_web::test]
async fn create_fragment_accepts_form_submission() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_form([("text", "posted from the index form")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = test::read_body(resp).await;
    let fragment: Value = serde_json::from_slice(&body).expect("fragment json");
    assert_eq!(
        fragment.get("text").and_then(Value::as_str),
        Some("posted from the index form")
    );
}

#[actix_web::test]
async fn list_returns_fragments_in_creation_order() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    for text in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/create-fragment")
            .set_json(json!({ "text": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/fragments").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let fragments: Value = serde_json::from_slice(&body).expect("fragments json");
    let items = fragments.as_array().expect("fragments array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("text").and_then(Value::as_str), Some("first"));
    assert_eq!(items[1].get("text").and_then(Value::as_str), Some("second"));
}

#[actix_web::test]
async fn get_unknown_fragment_returns_not_found() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get().uri("/fragments/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    let error: Value = serde_json::from_slice(&body).expect("error json");
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Fragment not found")
    );
}

#[actix_web::test]
async fn update_replaces_text_and_keeps_created_at() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_json(json!({ "text": "draft" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    let original_created_at = created
        .get("created_at")
        .and_then(Value::as_str)
        .expect("created_at")
        .to_string();

    let req = test::TestRequest::put()
        .uri("/fragments/1")
        .set_json(json!({ "text": "polished" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert_eq!(updated.get("text").and_then(Value::as_str), Some("polished"));
    assert_eq!(
        updated.get("created_at").and_then(Value::as_str),
        Some(original_created_at.as_str())
    );

    let req = test::TestRequest::get().uri("/fragments/1").to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert_eq!(fetched.get("text").and_then(Value::as_str), Some("polished"));
}

#[actix_web::test]
async fn update_rejects_non_json_content_type() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_json(json!({ "text": "keep me" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/fragments/1")
        .insert_header(("content-type", "text/plain"))
        .set_payload("ignored")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let error: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Content-Type must be application/json")
    );

    let req = test::TestRequest::get().uri("/fragments/1").to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert_eq!(fetched.get("text").and_then(Value::as_str), Some("keep me"));
}

#[actix_web::test]
async fn update_rejects_malformed_json_body() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_json(json!({ "text": "draft" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/fragments/1")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert!(error.get("error").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn update_unknown_fragment_returns_not_found() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::put()
        .uri("/fragments/42")
        .set_json(json!({ "text": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_fragment_and_reports_id() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::post()
        .uri("/create-fragment")
        .set_json(json!({ "text": "short lived" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/fragments/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("json");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Fragment with ID 1 deleted")
    );

    let req = test::TestRequest::get().uri("/fragments/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/fragments/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
