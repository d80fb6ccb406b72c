mod common;

use common::{TestApp, TEST_ORIGIN};
use echo_service::config::EchoConfig;
use serde_json::json;

fn header<'a>(response: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

fn assert_cors_allows(response: &reqwest::Response, origin: &str) {
    assert_eq!(
        header(response, "access-control-allow-origin"),
        Some(origin),
        "status {}",
        response.status()
    );
    assert_eq!(
        header(response, "access-control-allow-credentials"),
        Some("true")
    );
}

#[tokio::test]
async fn success_and_failure_responses_carry_cors_headers() {
    let app = TestApp::spawn().await;

    let ok = app
        .client
        .get(format!("{}/test", app.address))
        .header("origin", TEST_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(ok.status().as_u16(), 200);
    assert_cors_allows(&ok, TEST_ORIGIN);

    let echoed = app.post_echo_json(&json!({"message": "hi"})).await;
    assert_eq!(echoed.status().as_u16(), 200);
    assert_cors_allows(&echoed, TEST_ORIGIN);

    let invalid = app.post_echo_json(&json!({"message": 5})).await;
    assert_eq!(invalid.status().as_u16(), 422);
    assert_cors_allows(&invalid, TEST_ORIGIN);

    let malformed = app.post_echo_raw("{").await;
    assert_eq!(malformed.status().as_u16(), 422);
    assert_cors_allows(&malformed, TEST_ORIGIN);

    let missing = app
        .client
        .get(format!("{}/nowhere", app.address))
        .header("origin", TEST_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status().as_u16(), 404);
    assert_cors_allows(&missing, TEST_ORIGIN);

    let wrong_method = app
        .client
        .get(format!("{}/echo", app.address))
        .header("origin", TEST_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong_method.status().as_u16(), 405);
    assert_cors_allows(&wrong_method, TEST_ORIGIN);
}

#[tokio::test]
async fn arbitrary_origins_are_allowed() {
    let app = TestApp::spawn().await;

    for origin in ["https://example.com", "http://127.0.0.1:5173", "null"] {
        let response = app
            .client
            .get(format!("{}/test", app.address))
            .header("origin", origin)
            .send()
            .await
            .expect("Failed to execute request");

        assert_cors_allows(&response, origin);
    }
}

#[tokio::test]
async fn preflight_allows_any_method_and_header() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(reqwest::Method::OPTIONS, format!("{}/echo", app.address))
        .header("origin", TEST_ORIGIN)
        .header("access-control-request-method", "DELETE")
        .header("access-control-request-headers", "x-trace, content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_allows(&response, TEST_ORIGIN);
    assert_eq!(
        header(&response, "access-control-allow-methods"),
        Some("DELETE")
    );
    assert_eq!(
        header(&response, "access-control-allow-headers"),
        Some("x-trace, content-type")
    );
}

#[tokio::test]
async fn restricted_origin_list_is_honoured() {
    let mut config = EchoConfig::default();
    config.common.cors.allowed_origins = vec![TEST_ORIGIN.to_string()];
    let app = TestApp::spawn_with(config).await;

    let allowed = app
        .client
        .get(format!("{}/test", app.address))
        .header("origin", TEST_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request");
    assert_cors_allows(&allowed, TEST_ORIGIN);

    let denied = app
        .client
        .get(format!("{}/test", app.address))
        .header("origin", "https://elsewhere.test")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(denied.status().as_u16(), 200);
    assert_eq!(header(&denied, "access-control-allow-origin"), None);
}
