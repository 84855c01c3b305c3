use super::common::*;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::eligibility::router::{body_handler, query_handler};

#[tokio::test]
async fn query_handler_coerces_string_values() {
    let params: Vec<(String, String)> = [
        ("income", "10000"),
        ("age", "65"),
        ("livingCountry", "Canada"),
        ("legalStatus", "Canadian Citizen"),
        ("yearsInCanadaSince18", "10"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    let response = query_handler(State(service()), Query(params)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["oas"]["result"], "Eligible!");
    assert_eq!(body["oas"]["reason"], "You meet the criteria");
    assert_eq!(body["gis"]["missingFields"], json!(["maritalStatus"]));
}

#[tokio::test]
async fn body_handler_rejects_invalid_payloads() {
    let payload = serde_json::from_value(json!({ "age": 151 })).expect("object");

    let response = body_handler(State(service()), axum::Json(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Request is invalid!");
    assert_eq!(body["detail"][0]["field"], "age");
    assert_eq!(body["detail"][0]["kind"], "above_maximum");
}

#[tokio::test]
async fn get_route_reports_missing_income_for_empty_query() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/eligibility")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["allFields"], json!(["income"]));
    for benefit in ["oas", "gis", "allowance", "afs"] {
        assert_eq!(body[benefit]["result"], "Need more information...");
        assert_eq!(body[benefit]["missingFields"], json!(["income"]));
    }
}

#[tokio::test]
async fn get_route_rejects_unknown_query_keys() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/eligibility?income=100&colour=blue")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["detail"][0]["message"], "\"colour\" is not allowed");
}

#[tokio::test]
async fn post_route_accepts_json_bodies() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/eligibility")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&oas_submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["oas"]["result"], "Eligible!");
    assert_eq!(body["gis"]["result"], "Eligible!");
    assert_eq!(body["allowance"]["reason"], "Age does not meet requirement for this benefit");
    assert!(body["oas"].get("missingFields").is_none());
}

#[tokio::test]
async fn get_route_lists_supplied_fields_in_query_order() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/eligibility?age=65&income=10000")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["allFields"],
        json!(["age", "income", "livingCountry", "legalStatus"])
    );
}

#[tokio::test]
async fn post_route_lists_supplied_fields_in_body_order() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/eligibility")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    r#"{"maritalStatus":"Single","age":65,"income":10000}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["allFields"],
        json!(["maritalStatus", "age", "income", "livingCountry", "legalStatus"])
    );
}
