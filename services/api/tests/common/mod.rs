/// Common test utilities for integration tests
use axum_test::TestServer;
use serde_json::Value;

use api::config::Config;
use api::state::AppState;

/// Spin up the full router on an in-process test server.
pub fn test_server() -> TestServer {
    let config = Config {
        api_port: 0,
        metrics_port: 0,
    };
    let state = AppState::new(config);
    TestServer::new(api::build_router(state)).expect("Failed to start test server")
}

/// Extract the error message from an error response body.
pub fn error_message(body: &Value) -> &str {
    body.get("error")
        .and_then(Value::as_str)
        .expect("response has no error field")
}
