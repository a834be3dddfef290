//! Endpoint contract tests against an in-process router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use resume_ats::server::{router, AppState};
use resume_ats::service::AnalysisService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router_with(production: bool) -> axum::Router {
    let state = AppState {
        service: Arc::new(AnalysisService::new(None).unwrap()),
        production,
    };
    router(state)
}

fn test_router() -> axum::Router {
    test_router_with(true)
}

async fn post_analyze_with(production: bool, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_router_with(production).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_analyze(body: Value) -> (StatusCode, Value) {
    post_analyze_with(true, body).await
}

const RESUME: &str = "Jane Doe\njane@example.com | 555-123-4567\n\
    experience education skills\nLed testing work in git and sql, shipped api changes.\n\
    Improved throughput 30% for 500 users.";

#[tokio::test]
async fn rejects_missing_role_and_company() {
    let (status, body) = post_analyze(json!({ "resumeText": RESUME })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("MISSING_FIELDS"));
}

#[tokio::test]
async fn rejects_request_without_resume() {
    let (status, body) = post_analyze(json!({
        "jobRole": "Backend Engineer",
        "company": "Acme",
        "resumeText": "   ",
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("NO_RESUME"));
}

#[tokio::test]
async fn rejects_unknown_upload_type() {
    let (status, body) = post_analyze(json!({
        "jobRole": "Backend Engineer",
        "company": "Acme",
        "resumeFile": {
            "fileName": "resume.xyz",
            "fileType": "xyz",
            "content": "aGVsbG8=",
        },
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("UPLOAD_FAILED"));
}

#[tokio::test]
async fn rejects_undecodable_upload_content() {
    let (status, body) = post_analyze(json!({
        "jobRole": "Backend Engineer",
        "company": "Acme",
        "resumeFile": {
            "fileName": "resume.txt",
            "fileType": "text",
            "content": "not!!valid!!base64",
        },
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("UPLOAD_FAILED"));
}

fn corrupt_docx_request() -> Value {
    // Decodes fine but is not a zip archive, so extraction fails
    let content = base64::engine::general_purpose::STANDARD.encode(b"not a real document");
    json!({
        "jobRole": "Backend Engineer",
        "company": "Acme",
        "resumeFile": {
            "fileName": "resume.docx",
            "fileType": "docx",
            "content": content,
        },
    })
}

#[tokio::test]
async fn extraction_failure_is_opaque_in_production() {
    let (status, body) = post_analyze_with(true, corrupt_docx_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("INTERNAL_ERROR"));
    assert_eq!(body["error"]["message"], json!("An error occurred during analysis"));
    assert!(body["error"].get("details").is_none());
}

#[tokio::test]
async fn extraction_failure_carries_details_in_development() {
    let (status, body) = post_analyze_with(false, corrupt_docx_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("INTERNAL_ERROR"));
    assert!(body["error"]["details"].is_string());
}

#[tokio::test]
async fn analyzes_inline_resume_text() {
    let (status, body) = post_analyze(json!({
        "jobRole": "Software Engineer",
        "company": "Acme",
        "resumeText": RESUME,
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let score = body["data"]["atsAnalysis"]["atsScore"].as_i64().unwrap();
    assert!((0..=100).contains(&score));

    // No model is configured, so AI suggestions come from the fallback path
    assert_eq!(body["data"]["aiImprovements"]["source"], json!("fallback"));

    let potential = body["data"]["summary"]["potentialScore"].as_i64().unwrap();
    assert!(potential <= 100);
    assert!(potential >= score);

    assert!(body["metadata"]["processingTimeMs"].is_number());
}

#[tokio::test]
async fn analyzes_base64_text_upload() {
    let content = base64::engine::general_purpose::STANDARD.encode(RESUME);
    let (status, body) = post_analyze(json!({
        "jobRole": "Software Engineer",
        "company": "Acme",
        "resumeFile": {
            "fileName": "jane-doe.txt",
            "fileType": "text",
            "content": content,
        },
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["parsedResume"]["fileName"], json!("jane-doe.txt"));
    assert!(body["data"]["parsedResume"]["words"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn health_reports_version() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
