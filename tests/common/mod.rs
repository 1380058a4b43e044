use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What the mock `/classify` endpoint answers with.
#[derive(Clone, Copy, Debug)]
pub enum MockBehavior {
    /// `{"status":"success","result":{"prediction":"cat","confidence":"97.2%"}}`
    Success,
    /// HTTP 200 with `result` present but missing its fields.
    EmptyResult,
    /// HTTP 200 with `{"status":"error", ...}`.
    ErrorStatus,
    /// HTTP 500.
    ServerError,
    /// Success after a delay, for overlap tests.
    SlowSuccess,
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    hits: Arc<AtomicUsize>,
    saw_file_field: Arc<AtomicBool>,
}

/// In-process stand-in for the classification backend, bound to an ephemeral
/// local port.
pub struct MockClassifyServer {
    url: String,
    hits: Arc<AtomicUsize>,
    saw_file_field: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockClassifyServer {
    pub async fn spawn(behavior: MockBehavior) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let saw_file_field = Arc::new(AtomicBool::new(false));
        let state = MockState {
            behavior,
            hits: hits.clone(),
            saw_file_field: saw_file_field.clone(),
        };

        let app = Router::new()
            .route("/classify", post(classify))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock server");
        });

        Self {
            url: format!("http://{}", addr),
            hits,
            saw_file_field,
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of requests `/classify` has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Whether any request carried a multipart field named `file`.
    pub fn saw_file_field(&self) -> bool {
        self.saw_file_field.load(Ordering::SeqCst)
    }
}

impl Drop for MockClassifyServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn classify(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            state.saw_file_field.store(true, Ordering::SeqCst);
        }
        // Drain the field so the client can finish writing the body.
        let _ = field.bytes().await;
    }

    match state.behavior {
        MockBehavior::Success => success_response(),
        MockBehavior::SlowSuccess => {
            tokio::time::sleep(Duration::from_millis(400)).await;
            success_response()
        }
        MockBehavior::EmptyResult => {
            Json(json!({ "status": "success", "result": {} })).into_response()
        }
        MockBehavior::ErrorStatus => {
            Json(json!({ "status": "error", "message": "could not read image" })).into_response()
        }
        MockBehavior::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response()
        }
    }
}

fn success_response() -> Response {
    Json(json!({
        "status": "success",
        "result": { "prediction": "cat", "confidence": "97.2%" }
    }))
    .into_response()
}
