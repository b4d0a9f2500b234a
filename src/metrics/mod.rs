// Private module declaration
mod server;

use prometheus::{
    Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
};

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order submissions (accepted, rejected, latency)
// - Validation failures by rule
// - Stored order count
// - Webhook relay outcomes
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Submission Metrics
    pub orders_submitted: IntCounter,
    pub orders_rejected: IntCounterVec,
    pub validation_errors: IntCounterVec,
    pub submission_duration: Histogram,

    // Store Metrics
    pub orders_stored: IntGauge,

    // Relay Metrics
    pub relay_deliveries: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_submitted = IntCounter::new(
            "orders_submitted_total",
            "Total orders accepted and persisted",
        )?;
        registry.register(Box::new(orders_submitted.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total order submissions rejected"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let validation_errors = IntCounterVec::new(
            Opts::new("order_validation_errors_total", "Validation violations by rule"),
            &["rule"],
        )?;
        registry.register(Box::new(validation_errors.clone()))?;

        let submission_duration = Histogram::with_opts(
            HistogramOpts::new("order_submission_duration_seconds", "Order submission duration")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        )?;
        registry.register(Box::new(submission_duration.clone()))?;

        let orders_stored = IntGauge::new("orders_stored", "Orders currently held in the store")?;
        registry.register(Box::new(orders_stored.clone()))?;

        let relay_deliveries = IntCounterVec::new(
            Opts::new("webhook_relay_deliveries_total", "Webhook relay attempts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(relay_deliveries.clone()))?;

        Ok(Self {
            registry,
            orders_submitted,
            orders_rejected,
            validation_errors,
            submission_duration,
            orders_stored,
            relay_deliveries,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Encoder;

    #[test]
    fn test_metrics_registration() {
        let metrics = Metrics::new().unwrap();
        metrics.orders_submitted.inc();
        metrics.orders_rejected.with_label_values(&["validation"]).inc();
        metrics.relay_deliveries.with_label_values(&["delivered"]).inc();

        let mut buffer = Vec::new();
        prometheus::TextEncoder::new()
            .encode(&metrics.registry().gather(), &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("orders_submitted_total 1"));
        assert!(text.contains("orders_rejected_total{reason=\"validation\"} 1"));
        assert!(text.contains("webhook_relay_deliveries_total{outcome=\"delivered\"} 1"));
    }

    #[test]
    fn test_registries_are_independent() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();
        first.orders_submitted.inc();
        assert_eq!(second.orders_submitted.get(), 0);
    }
}
