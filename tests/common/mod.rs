//! Common test helpers and utilities.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mega_calculator::BasicCalculator;
use mega_calculator::web;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Helper to build the production router around a basic calculator
pub fn app() -> Router {
    web::router(Arc::new(BasicCalculator::new()))
}

/// Sends a request through the router without opening a socket.
///
/// Returns the status and the raw response body.
pub async fn send(
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_owned())).unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// POSTs a JSON body and parses the JSON response
pub async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, bytes) = send("POST", uri, Some("application/json"), body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// A calculator server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<mega_calculator::Result<()>>>,
}

impl TestServer {
    /// Binds 127.0.0.1:0 and starts serving in a background task
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(web::serve_listener(
            listener,
            Arc::new(BasicCalculator::new()),
            async move {
                let _ = rx.await;
            },
        ));

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// Sends a raw HTTP/1.1 POST and returns the full response text
    pub async fn post_raw(&self, path: &str, body: &str) -> String {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let request = format!(
            "POST {path} HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            self.addr,
            body.len()
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    /// Signals graceful shutdown and waits for the server task to finish
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("server task panicked")
                .expect("server returned an error");
        }
    }
}
