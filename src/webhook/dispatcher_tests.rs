//! Tests for `WebhookClient` and `HttpWebhook`.

use super::dispatcher::{HttpWebhook, WebhookClient};
use super::{
    DispatchError, HttpClient, HttpError, HttpRequest, HttpResponse, OutboundPayload,
    WebhookOutcome,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn replying(status: u16, content_type: &str, body: &str) -> Self {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_str(content_type).unwrap(),
        );
        Self::new(vec![Ok(HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            headers,
            body.as_bytes().to_vec(),
        ))])
    }

    fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

/// Client whose requests never complete.
struct HangingClient;

impl HttpClient for HangingClient {
    async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
        std::future::pending().await
    }
}

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/webhook/48652a25").unwrap()
}

fn test_payload() -> OutboundPayload {
    OutboundPayload::new(
        "The meeting is at noon.",
        "Pirate",
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_714_564_800),
    )
}

mod http_webhook_builder {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let webhook = HttpWebhook::new(MockClient::new(vec![]));

        assert_eq!(webhook.timeout(), Duration::from_secs(30));
        assert_eq!(webhook.timeout(), HttpWebhook::<MockClient>::DEFAULT_TIMEOUT);
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let webhook =
            HttpWebhook::new(MockClient::new(vec![])).with_timeout(Duration::from_millis(250));

        assert_eq!(webhook.timeout(), Duration::from_millis(250));
    }
}

mod request_shape {
    use super::*;

    #[tokio::test]
    async fn posts_json_to_given_url() {
        let client = Arc::new(MockClient::replying(200, "text/plain", "ok"));
        let webhook = HttpWebhook::new(Arc::clone(&client));

        webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(requests[0].url, test_url());
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            requests[0].headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn body_carries_payload_fields() {
        let client = Arc::new(MockClient::replying(200, "text/plain", "ok"));
        let webhook = HttpWebhook::new(Arc::clone(&client));

        webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        let body = client.captured_requests()[0].body.clone().unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            sent,
            json!({
                "text_input": "The meeting is at noon.",
                "selected_style": "Pirate",
                "timestamp": "2024-05-01T12:00:00.000Z",
            })
        );
    }
}

mod classification {
    use super::*;

    #[tokio::test]
    async fn json_reply_is_structured() {
        let client = MockClient::replying(
            200,
            "application/json",
            r#"{"styled_sentence":"Arr, the meetin' be at high noon."}"#,
        );
        let webhook = HttpWebhook::new(client);

        let outcome = webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert_eq!(
            outcome,
            WebhookOutcome::Structured(json!({
                "styled_sentence": "Arr, the meetin' be at high noon."
            }))
        );
    }

    #[tokio::test]
    async fn server_error_is_failure_not_error() {
        let client = MockClient::replying(500, "application/json", r#"{"error":"workflow crashed"}"#);
        let webhook = HttpWebhook::new(client);

        let outcome = webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert!(matches!(
            outcome,
            WebhookOutcome::Failure { status: Some(status), ref message }
                if status == http::StatusCode::INTERNAL_SERVER_ERROR
                    && message.contains("workflow crashed")
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_failure_not_error() {
        let client = MockClient::replying(200, "application/json", "not valid json");
        let webhook = HttpWebhook::new(client);

        let outcome = webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert!(outcome.is_failure());
    }
}

mod transport_errors {
    use super::*;

    #[tokio::test]
    async fn transport_timeout_becomes_failure() {
        let webhook = HttpWebhook::new(MockClient::failing(HttpError::Timeout));

        let outcome = webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert!(matches!(outcome, WebhookOutcome::Failure { status: None, .. }));
    }

    #[tokio::test]
    async fn connection_error_is_propagated() {
        let webhook = HttpWebhook::new(MockClient::failing(HttpError::Connection(Box::new(
            std::io::Error::other("connection refused"),
        ))));

        let result = webhook.dispatch(&test_payload(), &test_url()).await;

        assert!(matches!(
            result,
            Err(DispatchError::Http(HttpError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn invalid_url_is_propagated() {
        let webhook = HttpWebhook::new(MockClient::failing(HttpError::InvalidUrl(
            "bad scheme".to_string(),
        )));

        let result = webhook.dispatch(&test_payload(), &test_url()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, DispatchError::Http(HttpError::InvalidUrl(_))));
        assert!(err.to_string().contains("bad scheme"));
    }
}

mod deadline {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn unresponsive_webhook_times_out_as_failure() {
        let webhook = HttpWebhook::new(HangingClient).with_timeout(Duration::from_secs(5));

        let outcome = webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert_eq!(outcome, WebhookOutcome::timed_out(Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_elapses_on_tokio_clock() {
        let webhook = HttpWebhook::new(HangingClient).with_timeout(Duration::from_secs(30));
        let started = tokio::time::Instant::now();

        webhook.dispatch(&test_payload(), &test_url()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(30));
    }
}

#[test]
fn http_webhook_is_webhook_client() {
    fn assert_client<T: WebhookClient>() {}
    assert_client::<HttpWebhook<MockClient>>();
    assert_client::<HttpWebhook<Arc<MockClient>>>();
}
