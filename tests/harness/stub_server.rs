use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Default)]
struct Stub {
    routes: HashMap<(Method, String), (StatusCode, Value)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned JSON responses keyed by method and path. Unknown routes answer 404.
pub struct StubServer {
    addr: SocketAddr,
    stub: Arc<Stub>,
    task: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, &str, u16, Value)>) -> Self {
        let routes = routes
            .into_iter()
            .map(|(method, path, status, body)| {
                let method = Method::from_bytes(method.as_bytes()).unwrap();
                let status = StatusCode::from_u16(status).unwrap();
                ((method, path.to_string()), (status, body))
            })
            .collect();
        let stub = Arc::new(Stub {
            routes,
            ..Stub::default()
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&stub));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, stub, task }
    }

    /// Base URL with the given path prefix, e.g. `/api/v1`.
    pub fn base_url(&self, prefix: &str) -> String {
        format!("http://{}{}", self.addr, prefix)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.stub.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn respond(
    State(stub): State<Arc<Stub>>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let (status, payload) = stub
        .routes
        .get(&(method.clone(), path.clone()))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, json!({ "error": "not found" })));

    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path,
        query,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    (status, Json(payload)).into_response()
}
