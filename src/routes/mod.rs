//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the activity API and the static landing page under a single Axum
//! router. `/` redirects to the landing page; the page itself talks to the
//! JSON endpoints under `/activities`.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

/// Full application router: JSON API, landing page, health check.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_root_to_landing))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::sign_up))
        .route("/activities/{activity_name}/unregister", delete(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_landing() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
