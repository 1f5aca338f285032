mod common;

use common::mock_backend::{MockBackend, MockResponse};
use matchmint::config::LoginConfig;
use matchmint::identity::{IdentityError, LoginBridge};

#[tokio::test]
async fn fetch_profile_returns_the_display_name() {
    let mock = MockBackend::start().await;
    mock.set_response(
        "/v2/profile",
        MockResponse::json(r#"{"displayName": "Alice", "userId": "U1234"}"#),
    )
    .await;

    let bridge = LoginBridge::new(&LoginConfig {
        base_url: mock.base_url(),
        app_id: "app-123".to_string(),
    });

    let profile = bridge.fetch_profile().await.unwrap();
    assert_eq!(profile.display_name, "Alice");

    // The configured application identifier travels with the call.
    let requests = mock.requests_to("/v2/profile").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("x-app-id"), Some("app-123"));
}

#[tokio::test]
async fn profile_failure_is_a_typed_error_not_a_crash() {
    let mock = MockBackend::start().await;
    mock.set_response("/v2/profile", MockResponse::error(401, "unauthorized"))
        .await;

    let bridge = LoginBridge::new(&LoginConfig {
        base_url: mock.base_url(),
        app_id: "app-123".to_string(),
    });

    let err = bridge.fetch_profile().await.unwrap_err();
    assert!(matches!(err, IdentityError::Status(401)));
}
