//! End-to-end tests for the todo/list API and its header reports.

use reqwest::StatusCode;
use serde_json::{json, Value};

use header_lab::config::AppConfig;

mod common;

#[tokio::test]
async fn test_todo_crud_with_reports() {
    let app = common::spawn_app().await;

    let res = app
        .client
        .post(app.url("/todos"))
        .header("Authorization", "Bearer test-token")
        .json(&json!({ "name": "Buy milk", "isFinished": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["x-frame-options"], "DENY");
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    let id = body["todo"]["id"].as_i64().unwrap();
    assert_eq!(body["todo"]["name"], "Buy milk");
    assert_eq!(body["todo"]["isFinished"], false);
    assert_eq!(body["methods"], "POST");
    assert_eq!(body["protocol"], "http");
    assert_eq!(body["status"], 201);
    assert_eq!(body["url"], "/todos");
    assert_eq!(body["host"], app.addr.to_string());

    let auth = &body["requestReport"]["authentication"]["authorization"];
    assert_eq!(auth["status"], "present");
    assert_eq!(auth["value"], "Bearer test-token");
    assert_eq!(body["requestReport"]["client"]["from"]["status"], "absent");

    // The secure header layer runs before the report is built
    let security = &body["responseReport"]["security"];
    assert_eq!(security["strict-transport-security"]["status"], "present");
    assert_eq!(security["content-security-policy"]["status"], "present");
    assert_eq!(security["x-frame-options"]["value"], "DENY");
    assert_eq!(security["permissions-policy"]["status"], "absent");
    assert_eq!(body["responseReport"]["cache"]["cache-control"]["status"], "secure");
    assert_eq!(body["responseReport"]["content"]["content-type"]["status"], "present");

    let parsed = body["headers"].as_array().unwrap();
    let auth_header = parsed.iter().find(|h| h["name"] == "authorization").unwrap();
    assert_eq!(auth_header["value"], "Bearer test-token");

    let res = app
        .client
        .put(app.url(&format!("/todos/{}", id)))
        .json(&json!({ "name": "Buy oat milk", "isFinished": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["todo"]["isFinished"], true);

    let body: Value = app.client.get(app.url("/todos")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["todos"], json!([{ "id": id, "name": "Buy oat milk", "isFinished": true }]));

    let res = app.client.delete(app.url(&format!("/todos/{}", id))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["deleted"], true);
    assert!(body["responseReport"].is_object());
}

#[tokio::test]
async fn test_todo_errors() {
    let app = common::spawn_app().await;

    let res = app
        .client
        .put(app.url("/todos/999"))
        .json(&json!({ "name": "ghost", "isFinished": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "todo not found" }));

    let res = app
        .client
        .post(app.url("/todos"))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.client.delete(app.url("/todos/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_flow() {
    let app = common::spawn_app().await;

    let res = app.client.get(app.url("/")).send().await.unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/list");

    let res = app
        .client
        .post(app.url("/list"))
        .form(&[("text", "call the plumber")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["entry"]["id"].as_i64().unwrap();
    assert_eq!(
        body["requestReport"]["content"]["content-type"]["value"],
        "application/x-www-form-urlencoded"
    );

    let body: Value = app.client.get(app.url("/list")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["entries"][0]["text"], "call the plumber");

    let res = app
        .client
        .post(app.url(&format!("/list/{}/delete", id)))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());

    let body: Value = app.client.get(app.url("/list")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn test_reports_without_secure_headers() {
    let mut config = AppConfig::default();
    config.security.enable_headers = false;
    let app = common::spawn_app_with(config).await;

    let body: Value = app.client.get(app.url("/todos")).send().await.unwrap().json().await.unwrap();
    let report = &body["responseReport"];
    for header in ["strict-transport-security", "content-security-policy", "x-frame-options"] {
        let entry = &report["security"][header];
        assert_eq!(entry["status"], "absent", "{}", header);
        assert!(entry["recommendation"]
            .as_str()
            .unwrap()
            .starts_with("add this header to improve security: "));
    }
    assert_eq!(report["cache"]["cache-control"]["status"], "absent");
}

#[tokio::test]
async fn test_weak_configured_headers_are_flagged() {
    let mut config = AppConfig::default();
    config.security.strict_transport_security = "includeSubDomains".to_string();
    config.security.content_security_policy = " ".to_string();
    let app = common::spawn_app_with(config).await;

    let body: Value = app.client.get(app.url("/todos")).send().await.unwrap().json().await.unwrap();
    let security = &body["responseReport"]["security"];
    assert_eq!(security["strict-transport-security"]["status"], "attention");
    assert_eq!(
        security["strict-transport-security"]["recommendation"],
        "set an appropriate max-age (e.g., 31536000)"
    );
    assert_eq!(security["content-security-policy"]["status"], "alert");
}

#[tokio::test]
async fn test_headers_echo() {
    let app = common::spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/headers"))
        .header("Connection", "close")
        .header("X-Unknown-Header", "foo")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let headers = body["headers"].as_array().unwrap();
    let connection = headers.iter().find(|h| h["name"] == "connection").unwrap();
    assert_eq!(
        connection["meaning"],
        "The connection is closed once this exchange completes."
    );
    let unknown = headers.iter().find(|h| h["name"] == "x-unknown-header").unwrap();
    assert_eq!(unknown["meaning"], "no explanation available for this header.");
    assert_eq!(body["requestReport"]["networking"]["connection"]["value"], "close");
}

#[tokio::test]
async fn test_status() {
    let app = common::spawn_app().await;
    let body: Value = app.client.get(app.url("/status")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["status"], "operational");
}
