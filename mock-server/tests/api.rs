use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn health_returns_200_with_status_ok() {
    let app = app();
    let resp = app.oneshot(get("/api/v1/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "mock-server");
}

#[tokio::test]
async fn health_reports_uptime_version_and_timestamp() {
    let app = app();
    let resp = app.oneshot(get("/api/v1/health")).await.unwrap();

    let body = body_json(resp).await;
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(!body["version"].as_str().unwrap().is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn uptime_grows_between_requests() {
    let app = app();
    let first = body_json(app.clone().oneshot(get("/api/v1/health")).await.unwrap()).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = body_json(app.oneshot(get("/api/v1/health")).await.unwrap()).await;

    assert!(second["uptime"].as_f64().unwrap() > first["uptime"].as_f64().unwrap());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = app();
    let resp = app.oneshot(get("/api/v1/recipes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
