//! HTTP transport — maps slash-command POSTs to dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /` — handle a slash-command invocation. Body = form-encoded
//!   platform payload (`command`, `text`, `user_name`).
//! - `GET /health` — health check returning `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mutexbot::{Dispatcher, InMemoryClaimStore, Secrets};
//! use mutexbot::http::{self, App};
//!
//! let mut secrets = Secrets::new();
//! secrets.set("resources", "staging,ci-pool");
//!
//! let app = Arc::new(App::new(Dispatcher::new(InMemoryClaimStore::new()), secrets));
//!
//! // Get the router to compose with other axum routes
//! let router = http::router(app.clone());
//!
//! // Or serve directly
//! http::serve(app, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::dispatch::{Dispatcher, Secrets, SlashRequest};
use crate::store::ClaimStore;

/// The served application: a dispatcher plus the process-level secrets.
pub struct App<S> {
    dispatcher: Dispatcher<S>,
    secrets: Secrets,
}

impl<S: ClaimStore> App<S> {
    /// Create an app from a dispatcher and the deployment's secrets.
    pub fn new(dispatcher: Dispatcher<S>, secrets: Secrets) -> Self {
        Self {
            dispatcher,
            secrets,
        }
    }
}

/// Build an axum `Router` that handles slash commands via the given app.
pub fn router<S: ClaimStore + 'static>(app: Arc<App<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", post(slash_handler))
        .with_state(app)
}

/// Serve the app over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: ClaimStore + 'static>(
    app: Arc<App<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let router = router(app);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// `GET /health` — returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `POST /` — dispatch a form-encoded slash-command payload.
async fn slash_handler<S: ClaimStore + 'static>(
    State(app): State<Arc<App<S>>>,
    Form(request): Form<SlashRequest>,
) -> impl IntoResponse {
    match app.dispatcher.dispatch(&request, &app.secrets) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            let body = json!({ "error": e.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
