use std::{collections::VecDeque, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{Path, State},
    routing::post,
};
use tokio::sync::Mutex;

/// One recorded request: dotted method name plus decoded form fields in
/// arrival order.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub fields: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone)]
struct ServerState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<VecDeque<String>>>,
}

async fn api_handler(
    State(state): State<ServerState>,
    Path(method): Path<String>,
    body: String,
) -> String {
    let fields: Vec<(String, String)> =
        serde_urlencoded::from_str(&body).expect("form-encoded body");
    state.calls.lock().await.push(RecordedCall { method, fields });
    state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| r#"{"result":null}"#.to_string())
}

/// An in-process Conduit endpoint that records every call and replays
/// queued response bodies in order.
pub struct FakeConduit {
    pub url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeConduit {
    pub async fn start(responses: Vec<serde_json::Value>) -> anyhow::Result<Self> {
        Self::start_raw(responses.into_iter().map(|value| value.to_string()).collect()).await
    }

    /// Like [`FakeConduit::start`], but replays raw bodies that need not
    /// be valid JSON.
    pub async fn start_raw(responses: Vec<String>) -> anyhow::Result<Self> {
        let state = ServerState {
            calls: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(responses.into())),
        };
        let app = Router::new()
            .route("/api/{method}", post(api_handler))
            .with_state(state.clone());

        let listener =
            tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let url = format!("http://127.0.0.1:{}", listener.local_addr()?.port());
        tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(FakeConduit {
            url,
            calls: state.calls,
        })
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}
