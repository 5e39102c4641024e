use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};

pub const CHECK_PATH: &str = "/api/auth/check";

/// `GET /api/auth/check` answering every request with a fixed status and body.
pub struct StubAuthority {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_authorization: Arc<Mutex<Option<String>>>,
}

impl StubAuthority {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_authorization = Arc::new(Mutex::new(None));

        let handler_hits = hits.clone();
        let handler_authorization = last_authorization.clone();
        let app = Router::new().route(
            CHECK_PATH,
            get(move |headers: HeaderMap| {
                let hits = handler_hits.clone();
                let authorization = handler_authorization.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    *authorization.lock().expect("mutex poisoned") = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub authority");
        let addr = listener.local_addr().expect("stub authority address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub authority");
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            last_authorization,
        }
    }

    pub fn check_url(&self) -> String {
        format!("{}{CHECK_PATH}", self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization
            .lock()
            .expect("mutex poisoned")
            .clone()
    }
}

/// URL on a port nothing listens on.
pub async fn unreachable_check_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}{CHECK_PATH}")
}
