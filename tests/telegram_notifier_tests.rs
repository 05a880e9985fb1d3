#![cfg(feature = "telegram")]

use std::time::Duration;

use reviewbot::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use reviewbot::error::NotifyError;
use reviewbot::port::Notifier;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOT_TOKEN: &str = "123456:test-token";
const SEND_PATH: &str = "/bot123456:test-token/SendMessage";

fn notifier_for(server: &MockServer, timeout: Duration) -> TelegramNotifier {
    TelegramNotifier::new(TelegramConfig {
        bot_token: BOT_TOKEN.into(),
        chat_id: 42,
        timeout,
        api_url: Some(Url::parse(&server.uri()).expect("mock server url")),
    })
}

#[tokio::test]
async fn slow_send_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "result": true}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(200);
    let err = notifier_for(&server, timeout)
        .notify("hello")
        .await
        .unwrap_err();

    assert_eq!(err, NotifyError::Timeout(timeout));
}

#[tokio::test]
async fn retry_after_response_is_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 5",
            "parameters": {"retry_after": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = notifier_for(&server, Duration::from_secs(2))
        .notify("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::RateLimited(_)), "got {err:?}");
}

#[tokio::test]
async fn unknown_chat_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = notifier_for(&server, Duration::from_secs(2))
        .notify("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Rejected(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_api_is_transport_error() {
    let server = MockServer::start().await;
    let notifier = notifier_for(&server, Duration::from_secs(2));
    drop(server);

    let err = notifier.notify("hello").await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)), "got {err:?}");
}
