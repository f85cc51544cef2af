//! Scripted HTTP peer for client tests.
//!
//! `MockTextServer` binds `127.0.0.1:0`, answers configured paths with a fixed
//! status and body, and returns 404 for everything else.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::net::{TcpListener, TcpSocket};
use tokio::task::JoinHandle;

/// One scripted answer.
#[derive(Clone, Debug)]
pub struct Scripted {
    pub status: StatusCode,
    pub body: String,
    /// Sleep before answering, to control completion order.
    pub delay: Duration,
}

impl Scripted {
    pub fn ok(body: &str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, Scripted>>,
    hits: Arc<AtomicUsize>,
}

pub struct MockTextServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl MockTextServer {
    /// Start serving `routes` (path → answer) on an ephemeral port.
    pub async fn start<I, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (P, Scripted)>,
        P: Into<String>,
    {
        let routes: HashMap<String, Scripted> =
            routes.into_iter().map(|(p, s)| (p.into(), s)).collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            routes: Arc::new(routes),
            hits: Arc::clone(&hits),
        };
        let app = Router::new().fallback(answer).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server error");
        });

        Self { addr, hits, task }
    }

    /// `http://127.0.0.1:<port>` with no trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Number of requests received, matched or not.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockTextServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn answer(State(state): State<MockState>, req: Request) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.routes.get(req.uri().path()) {
        Some(scripted) => {
            if !scripted.delay.is_zero() {
                tokio::time::sleep(scripted.delay).await;
            }
            (scripted.status, scripted.body.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// A local address that is bound but never listening, so every connection
/// to it is refused. The port stays reserved while this value lives.
pub struct RefusedUrl {
    _socket: TcpSocket,
    addr: SocketAddr,
}

impl RefusedUrl {
    pub fn bind() -> Self {
        let socket = TcpSocket::new_v4().expect("failed to create probe socket");
        socket
            .bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .expect("failed to bind probe socket");
        let addr = socket.local_addr().expect("probe socket has no address");
        Self {
            _socket: socket,
            addr,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
