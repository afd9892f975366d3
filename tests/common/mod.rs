#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use homework_bot::Config;
use tokio::net::TcpListener;

pub const HOMEWORKS_PATH: &str = "/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct Canned {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn answer(
    State(canned): State<Arc<Canned>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    canned.requests.lock().unwrap().push(RecordedRequest {
        method,
        uri: uri.to_string(),
        headers,
        body,
    });
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
}

/// Answers every request with the same canned reply and records what it got.
pub struct FakeServer {
    pub url: String,
    canned: Arc<Canned>,
}

impl FakeServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let canned = Arc::new(Canned {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            requests: Mutex::new(vec![]),
        });
        let app = Router::new().fallback(answer).with_state(canned.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake server");
        });

        Self {
            url: format!("http://{addr}"),
            canned,
        }
    }

    /// The first request the server answered.
    pub fn received(&self) -> RecordedRequest {
        self.canned
            .requests
            .lock()
            .unwrap()
            .first()
            .cloned()
            .expect("fake server received no request")
    }
}

pub fn config(practicum_url: &str, telegram_url: &str) -> Config {
    Config::from_lookup(|name| match name {
        "PRACTICUM_TOKEN" => Some("yp-token".to_string()),
        "TELEGRAM_TOKEN" => Some("tg-token".to_string()),
        "TELEGRAM_CHAT_ID" => Some("12345".to_string()),
        "PRACTICUM_ENDPOINT" => Some(format!("{practicum_url}{HOMEWORKS_PATH}")),
        "TELEGRAM_API_URL" => Some(telegram_url.to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Address nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
