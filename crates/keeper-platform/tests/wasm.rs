//! WASM-target tests for keeper-platform.
//!
//! Run under wasm32-unknown-unknown via `wasm-pack test --node`.
//! Nothing here needs a live backend.

use wasm_bindgen_test::*;

use keeper_core::ports::TimerPort;
use keeper_platform::http::{HttpBackend, error_detail};
use keeper_platform::timer::BrowserTimer;
use keeper_types::api;
use keeper_types::config::ClientConfig;

#[wasm_bindgen_test]
fn endpoint_joins_base_and_path() {
    let backend = HttpBackend::new(&ClientConfig::default());
    assert_eq!(
        backend.endpoint(api::CHAT_SEND_PATH),
        "http://localhost:8000/api/v1/chat/send"
    );
    assert_eq!(
        backend.endpoint(&api::story_path("3")),
        "http://localhost:8000/api/v1/stories/3"
    );
}

#[wasm_bindgen_test]
fn endpoint_trims_trailing_slash() {
    let config = ClientConfig {
        api_base: "https://keeper.example/".to_string(),
        ..ClientConfig::default()
    };
    let backend = HttpBackend::new(&config);
    assert_eq!(
        backend.endpoint(api::STATS_PATH),
        "https://keeper.example/api/v1/dashboard/stats"
    );
}

#[wasm_bindgen_test]
fn error_detail_reads_fastapi_body() {
    assert_eq!(error_detail(r#"{"detail":"Story not found"}"#), "Story not found");
    assert_eq!(error_detail("Internal Server Error\n"), "Internal Server Error");
    assert_eq!(error_detail(r#"{"message":"x"}"#), r#"{"message":"x"}"#);
}

#[wasm_bindgen_test]
async fn browser_timer_resolves() {
    BrowserTimer.sleep(1).await;
}
