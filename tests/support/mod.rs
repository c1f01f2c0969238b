use std::process::{Command, Output};

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const INDEX_PAGE: &str =
    "<html><body><h1>It works</h1><img src=\"v1.jpg\" alt=\"banner\"></body></html>";

/// Throwaway in-process server standing in for the web server under
/// test. Serves one fixed response on every root GET.
pub struct StubServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn serve(status: StatusCode, body: &'static str) -> Self {
        let app = Router::new().route("/", get(move || async move { (status, Html(body)) }));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn run_smoke(target_url: &str) -> Output {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("webserver-smoke"));
    cmd.env("SMOKE_TARGET_URL", target_url)
        .env("SMOKE_TIMEOUT_MS", "2000")
        .env("RUST_LOG", "webserver_smoke=info");
    cmd.output().expect("run webserver-smoke")
}
