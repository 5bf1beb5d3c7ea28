//! Tests for the receive endpoint.

use super::handler::{ACTIVE, INVALID_JSON, PROCESSING_FAILED, RECEIVED, rejection};
use super::{RECEIVE_PATH, serve};

use axum::http::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningReceiver {
    url: String,
    stop: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

async fn start_receiver() -> RunningReceiver {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();
    let task = tokio::spawn(serve(listener, async move {
        let _ = stopped.await;
    }));

    RunningReceiver {
        url: format!("http://{addr}{RECEIVE_PATH}"),
        stop,
        task,
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn post_body(url: &str, body: &'static str) -> (u16, Value) {
    let resp = client()
        .post(url)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let json = resp.json::<Value>().await.unwrap();
    (status, json)
}

mod post {
    use super::*;

    #[tokio::test]
    async fn valid_json_is_acknowledged() {
        let receiver = start_receiver().await;

        let (status, body) =
            post_body(&receiver.url, r#"{"styled_sentence":"Ahoy, matey!"}"#).await;

        assert_eq!(status, 200);
        assert_eq!(body, json!({ "message": RECEIVED }));
    }

    #[tokio::test]
    async fn any_json_value_is_acknowledged() {
        let receiver = start_receiver().await;

        let (status, _) = post_body(&receiver.url, "[1, 2, 3]").await;

        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn document_larger_than_two_mebibytes_is_acknowledged() {
        let receiver = start_receiver().await;
        let body = json!({ "styled_sentence": "a".repeat(3 * 1024 * 1024) }).to_string();

        let resp = client()
            .post(&receiver.url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            resp.json::<Value>().await.unwrap(),
            json!({ "message": RECEIVED })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let receiver = start_receiver().await;

        let (status, body) = post_body(&receiver.url, "{not json").await;

        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": INVALID_JSON }));
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        let receiver = start_receiver().await;

        let (status, body) = post_body(&receiver.url, "").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], INVALID_JSON);
    }
}

mod get {
    use super::*;

    #[tokio::test]
    async fn reports_endpoint_is_active() {
        let receiver = start_receiver().await;

        let resp = client().get(&receiver.url).send().await.unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            resp.json::<Value>().await.unwrap(),
            json!({ "message": ACTIVE })
        );
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn shuts_down_when_signalled() {
        let receiver = start_receiver().await;

        receiver.stop.send(()).unwrap();

        assert!(receiver.task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let receiver = start_receiver().await;
        let url = receiver.url.replace(RECEIVE_PATH, "/elsewhere");

        let resp = client().post(url).body("{}").send().await.unwrap();

        assert_eq!(resp.status().as_u16(), 404);
    }
}

mod rejection_mapping {
    use super::*;

    async fn body_of(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let error = serde_json::from_str::<Value>("{").unwrap_err();

        let resp = rejection(&error);

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(resp).await, json!({ "error": INVALID_JSON }));
    }

    #[tokio::test]
    async fn data_error_is_server_error_with_details() {
        let error = serde_json::from_str::<u8>(r#""not a number""#).unwrap_err();

        let resp = rejection(&error);

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(resp).await;
        assert_eq!(body["error"], PROCESSING_FAILED);
        assert!(body["details"].as_str().unwrap().contains("invalid type"));
    }
}
