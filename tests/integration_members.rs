mod common;

use axum::http::StatusCode;
use clubroll_models::RegistrationNumber;
use common::{send, setup_test_app, valid_payload};
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "message": "API is running"}));
}

#[tokio::test]
async fn test_register_success_returns_canonical_member() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/register",
        Some(valid_payload("T/DEG/2024/001")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful!");
    assert_eq!(body["data"]["reg_number"], "T/DEG/2024/1");
    assert_eq!(body["data"]["active"], true);
    assert_eq!(body["data"]["departments"], json!(["Programming", "Cyber Security"]));
}

#[tokio::test]
async fn test_register_padded_duplicate_conflicts() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/register",
        Some(valid_payload("T/DEG/2020/544")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/register",
        Some(valid_payload("T/DEG/2020/0544")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "DUPLICATE_MEMBER");
    assert_eq!(body["error"]["message"], "Member already registered");
}

#[tokio::test]
async fn test_register_reports_every_invalid_field() {
    let (app, _) = setup_test_app();

    let mut payload = valid_payload("T/DIP/2023/12");
    payload.as_object_mut().unwrap().remove("full_name");
    payload["year_of_study"] = json!(5);

    let (status, body) = send(&app, "POST", "/api/register", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid input data");
    assert_eq!(
        body["error"]["details"],
        json!({
            "full_name": "Full name is required",
            "year_of_study": "Year of study must be between 1 and 3"
        })
    );
}

#[tokio::test]
async fn test_register_rejects_non_object_body() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "POST", "/api/register", Some(json!(["nope"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_check_member_missing_reg_number() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "POST", "/api/check-member", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    assert_eq!(body["error"]["message"], "Registration number is required");
}

#[tokio::test]
async fn test_check_member_invalid_format() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/check-member",
        Some(json!({"reg_number": "X/DEG/2024/1"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REG_NUMBER");
    assert_eq!(
        body["error"]["message"],
        "Invalid registration number format. Examples: T/DEG/2024/001 or T/DIP/2024/1025"
    );
}

#[tokio::test]
async fn test_check_member_not_found() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/check-member",
        Some(json!({"reg_number": "T/DEG/2024/99"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Member not found");
    assert_eq!(body["data"], json!({"exists": false}));
}

#[tokio::test]
async fn test_check_member_matches_padded_input() {
    let (app, _) = setup_test_app();
    send(
        &app,
        "POST",
        "/api/register",
        Some(valid_payload("T/DIP/2022/7")),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/check-member",
        Some(json!({"reg_number": "  T/DIP/2022/007 "})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["exists"], true);
    assert_eq!(body["data"]["member"]["reg_number"], "T/DIP/2022/7");
}

#[tokio::test]
async fn test_members_lists_only_active() {
    let (app, state) = setup_test_app();
    for reg in ["T/DEG/2024/1", "T/DEG/2024/2"] {
        send(&app, "POST", "/api/register", Some(valid_payload(reg))).await;
    }
    state
        .store
        .set_active(&RegistrationNumber::new("T/DEG/2024/2").unwrap(), false)
        .await
        .unwrap();

    let (status, body) = send(&app, "GET", "/api/members", None).await;

    assert_eq!(status, StatusCode::OK);
    let members = body["data"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["reg_number"], "T/DEG/2024/1");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Clubroll API");
}
