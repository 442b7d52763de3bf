#![allow(dead_code)]

use axum::http::StatusCode;
use formcraft::api::{self, AppState};
use formcraft::config::Config;
use formcraft::db::init_db;
use formcraft::{DefaultFormService, Repository};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestApp {
    pub app: axum::Router,
    _temp: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let service = Arc::new(DefaultFormService::new(repo));

    let mut env_map = HashMap::new();
    env_map.insert("DATABASE_PATH".to_string(), db_path);
    let config = Config::from_env_map(env_map).unwrap();

    TestApp {
        app: api::create_router(AppState::new(service, config)),
        _temp: temp_dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let builder = axum::http::Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(axum::body::Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(axum::body::Body::empty()).unwrap(),
        };

        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        (status, body)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.request("GET", uri, None).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.request("POST", uri, Some(&body.to_string())).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn create_form(&self, name: &str, elements: &str) -> i64 {
        let (status, json) = self
            .post_json(
                "/api/forms",
                serde_json::json!({"name": name, "elements": elements}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_i64().unwrap()
    }
}
