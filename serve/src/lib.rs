//! HTTP server for LearnPath (axum).
//!
//! Routes: `POST /api/{chat,explainer,mentor,evaluation,schedule}`,
//! `GET /api/test`; every other path serves the embedded client shell.
//! Gateway failures return HTTP 500 with an `error` field.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod chat;
mod features;
mod response;
mod schedule;

use std::sync::Arc;

use learnpath::{CompletionGateway, GroqChat};
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Listen address: explicit `addr` wins, then `PORT` (loopback), then the default.
fn resolve_addr(addr: Option<&str>) -> String {
    if let Some(a) = addr {
        return a.to_string();
    }
    match std::env::var("PORT") {
        Ok(port) if !port.is_empty() => format!("127.0.0.1:{}", port),
        _ => DEFAULT_ADDR.to_string(),
    }
}

/// Runs the server on an existing listener with the given gateway.
/// Used by tests (bind to 127.0.0.1:0, pass a [`MockGateway`](learnpath::MockGateway)).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    gateway: Arc<dyn CompletionGateway>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("LearnPath server listening on http://{}", addr);

    let state = Arc::new(AppState { gateway });
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Runs the server with the real Groq gateway. Listens on `addr`
/// (default 127.0.0.1:3000, `PORT` env override).
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = resolve_addr(addr);
    let listener = TcpListener::bind(&addr).await?;
    let gateway: Arc<dyn CompletionGateway> = Arc::new(GroqChat::from_env());
    run_serve_on_listener(listener, gateway).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_addr_wins_over_port_env_and_default() {
        let prev = std::env::var("PORT").ok();

        std::env::set_var("PORT", "4100");
        assert_eq!(resolve_addr(Some("0.0.0.0:8081")), "0.0.0.0:8081");
        assert_eq!(resolve_addr(None), "127.0.0.1:4100");

        std::env::remove_var("PORT");
        assert_eq!(resolve_addr(None), DEFAULT_ADDR);

        match prev {
            Some(v) => std::env::set_var("PORT", v),
            None => std::env::remove_var("PORT"),
        }
    }
}
