// ============================================================================
// HTTP API
// ============================================================================
//
// Routes:
//   POST /orders        submit a candidate order
//   GET  /orders        every stored order, oldest first
//   GET  /orders/{id}   one order
//   GET  /menu          read-only catalog, optional ?category=
//   GET  /health        liveness
//   GET  /metrics       Prometheus exposition
//
// ============================================================================

mod errors;
mod handlers;

use actix_web::web;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::order::SubmissionService;
use crate::metrics::{health_handler, metrics_handler, Metrics};

use errors::ApiError;

/// Shared, read-mostly state handed to every worker.
pub struct AppState {
    pub orders: SubmissionService,
    pub catalog: Arc<Catalog>,
    pub metrics: Arc<Metrics>,
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected malformed request body");
            ApiError::MalformedBody(err.to_string()).into()
        })
}

/// Registers state and routes; pass to `App::configure`.
pub fn configure(
    state: web::Data<AppState>,
    json_limit: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let metrics = web::Data::new(state.metrics.clone());

        cfg.app_data(state)
            .app_data(metrics)
            .app_data(json_config(json_limit))
            .service(
                web::resource("/orders")
                    .route(web::post().to(handlers::create_order))
                    .route(web::get().to(handlers::list_orders)),
            )
            .route("/orders/{id}", web::get().to(handlers::get_order))
            .route("/menu", web::get().to(handlers::list_menu))
            .route("/health", web::get().to(health_handler))
            .route("/metrics", web::get().to(metrics_handler));
    }
}

// ============================================================================
// HTTP Tests
// ============================================================================
