mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_view_form_renders_html() {
    let test_app = setup_test_app().await;
    let id = test_app
        .create_form(
            "Feedback",
            r#"[{"id":"q1","type":"email","label":"Email","required":true,"placeholder":"you@example.com"}]"#,
        )
        .await;

    let req = axum::http::Request::builder()
        .uri(format!("/public/forms/{}", id))
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = test_app.app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<h1>Feedback</h1>"));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"name="q1""#));
    assert!(html.contains("/api/submit"));
}

#[tokio::test]
async fn test_view_form_unparseable_elements_is_server_error() {
    let test_app = setup_test_app().await;
    let id = test_app.create_form("Broken", "not a list").await;

    let (status, body) = test_app
        .request("GET", &format!("/public/forms/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to parse form data"));
}

#[tokio::test]
async fn test_view_form_unknown_and_invalid_ids() {
    let test_app = setup_test_app().await;

    let (status, _) = test_app.request("GET", "/public/forms/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = test_app.request("GET", "/public/forms/seven", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_view_form_tolerates_missing_label_and_null_required() {
    let test_app = setup_test_app().await;
    let id = test_app
        .create_form(
            "Sparse",
            r#"[{"id":"q1","type":"text"},{"id":"q2","type":"textarea","label":"Notes","required":null}]"#,
        )
        .await;

    let (status, body) = test_app
        .request("GET", &format!("/public/forms/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"name="q1""#));
    assert!(html.contains(r#"<textarea name="q2" rows="4" placeholder=""></textarea>"#));
}

#[tokio::test]
async fn test_view_form_wrong_value_type_is_server_error() {
    let test_app = setup_test_app().await;
    let id = test_app
        .create_form("Typed", r#"[{"id":"q1","type":"text","required":"yes"}]"#)
        .await;

    let (status, _) = test_app
        .request("GET", &format!("/public/forms/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
