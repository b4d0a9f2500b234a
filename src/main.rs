use actix::prelude::*;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod actors;
mod api;
mod catalog;
mod config;
mod domain;
mod messaging;
mod metrics;
mod store;

use actors::NotificationRelay;
use api::AppState;
use catalog::Catalog;
use config::Config;
use domain::order::{OrderLimits, OrderValidator, PricingPolicy, SubmissionService};
use messaging::WebhookClient;
use store::{InMemoryOrderStore, OrderStore};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,catering_orders=debug"))
        )
        .init();

    tracing::info!("🚀 Starting catering order service");

    // === 1. Configuration ===
    let config = Config::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        delivery_fee_per_day = config.delivery_fee_per_day,
        max_delivery_days = config.max_delivery_days,
        "Configuration loaded"
    );

    // === 2. Menu catalog (read-only for the life of the process) ===
    let catalog = match &config.menu_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading menu catalog from file");
            Catalog::from_json_file(path)?
        }
        None => Catalog::standard_menu(),
    };
    if catalog.is_empty() {
        tracing::warn!("Menu catalog is empty - every order will be rejected");
    }
    tracing::info!(items = catalog.len(), "🍲 Menu catalog ready");
    let catalog = Arc::new(catalog);

    // === 3. Prometheus metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 4. Order store ===
    let store: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::new());
    tracing::warn!("Orders are kept in memory only and are lost on restart");

    // === 5. Webhook relay actor ===
    let relay = match &config.webhook_url {
        Some(url) => {
            let webhook = WebhookClient::new(url.clone(), config.relay_timeout)?;
            let addr = NotificationRelay::new(webhook, metrics.clone()).start();
            Some(addr.recipient())
        }
        None => {
            tracing::warn!("CATERING_WEBHOOK_URL not set - order notifications disabled");
            None
        }
    };

    // === 6. Submission service ===
    let orders = SubmissionService::new(
        OrderValidator::new(
            catalog.clone(),
            OrderLimits {
                max_delivery_days: config.max_delivery_days,
            },
        ),
        PricingPolicy::new(config.delivery_fee_per_day),
        store,
        relay,
        metrics.clone(),
    );

    let state = web::Data::new(AppState {
        orders,
        catalog,
        metrics,
    });

    // === 7. HTTP server ===
    tracing::info!("📡 Listening on http://{}", config.bind_addr);
    let json_limit = config.max_body_bytes;
    HttpServer::new(move || App::new().configure(api::configure(state.clone(), json_limit)))
        .bind(config.bind_addr.as_str())?
        .run()
        .await?;

    tracing::info!("👋 Server stopped");

    Ok(())
}
