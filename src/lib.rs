//! Feedback collection backend and terminal dashboard.
//!
//! The server exposes a small JSON API:
//! - `POST /api/feedback` — submit a rating + comment
//! - `GET /api/feedback?rating=&q=&sort=` — filtered list, capped at 1000 rows
//! - `GET /api/feedback/stats` — aggregate statistics over all feedback
//! - `GET /api/admin/...` — optional Basic-auth gated admin area
//! - `GET /` — liveness probe
//!
//! Records live in a SQLite database owned by the process; the schema is
//! created on startup. The `dashboard` binary drives the same API over HTTP
//! through [`client::ApiClient`].
//!
//! Environment: `PORT`, `DATABASE_URL`, `ADMIN_USER`/`ADMIN_PASS`,
//! `FEEDBACK_API_URL` (dashboard), `RUST_LOG`. A `.env` file is honoured.

use actix_web::web::{self, JsonConfig, QueryConfig};
use actix_web::HttpResponse;

pub mod auth;
pub mod client;
pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

/// Registers every route plus the JSON/query extractor error handlers, so the
/// server binary and the test harness build identical applications.
pub fn routes(cfg: &mut web::ServiceConfig) {
    let json_config = JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    });

    let query_config = QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        .service(controllers::home_controller::index)
        .service(controllers::feedback_controller::create_feedback)
        .service(controllers::feedback_controller::feedback_stats)
        .service(controllers::feedback_controller::list_feedback)
        .service(controllers::admin_controller::admin_area);
}
