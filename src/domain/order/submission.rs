use actix::Recipient;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::actors::NotifyOrder;
use crate::metrics::Metrics;
use crate::store::{OrderStore, StoreError};

use super::aggregate::{NewOrder, Order};
use super::commands::SubmitOrder;
use super::errors::ValidationErrors;
use super::pricing::PricingPolicy;
use super::validation::OrderValidator;

// ============================================================================
// Order Submission Service
// ============================================================================
//
// Orchestrates: Received → Validated → Priced → Persisted → RelayDispatched
//
// Validation and pricing are synchronous. The relay is handed a copy of the
// persisted order and never awaited; whatever happens to it cannot reach the
// caller.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Received,
    Validated,
    Priced,
    Persisted,
    RelayDispatched,
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionStage::Received => "received",
            SubmissionStage::Validated => "validated",
            SubmissionStage::Priced => "priced",
            SubmissionStage::Persisted => "persisted",
            SubmissionStage::RelayDispatched => "relay_dispatched",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Order store failure: {0}")]
    Internal(StoreError),
}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => SubmissionError::NotFound(id),
            other => SubmissionError::Internal(other),
        }
    }
}

pub struct SubmissionService {
    validator: OrderValidator,
    pricing: PricingPolicy,
    store: Arc<dyn OrderStore>,
    relay: Option<Recipient<NotifyOrder>>,
    metrics: Arc<Metrics>,
}

impl SubmissionService {
    pub fn new(
        validator: OrderValidator,
        pricing: PricingPolicy,
        store: Arc<dyn OrderStore>,
        relay: Option<Recipient<NotifyOrder>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            validator,
            pricing,
            store,
            relay,
            metrics,
        }
    }

    /// Validate, price and persist a candidate order, then hand it to the relay.
    pub async fn submit(&self, candidate: SubmitOrder) -> Result<Order, SubmissionError> {
        let timer = self.metrics.submission_duration.start_timer();
        tracing::debug!(stage = %SubmissionStage::Received, days = candidate.delivery_days.len(), "Order submission received");

        let validated = match self.validator.validate(&candidate) {
            Ok(validated) => validated,
            Err(errors) => {
                self.metrics.orders_rejected.with_label_values(&["validation"]).inc();
                for error in errors.errors() {
                    self.metrics.validation_errors.with_label_values(&[error.rule()]).inc();
                }
                tracing::warn!(
                    error_count = errors.errors().len(),
                    errors = ?errors.field_errors(),
                    "Order rejected by validation"
                );
                timer.observe_duration();
                return Err(errors.into());
            }
        };
        tracing::debug!(stage = %SubmissionStage::Validated, "Order validated");

        let pricing = self.pricing.price(&validated.delivery_days);
        tracing::debug!(
            stage = %SubmissionStage::Priced,
            subtotal = pricing.subtotal,
            delivery_fee = pricing.delivery_fee,
            total = pricing.total,
            "Order priced"
        );

        let order = match self.store.create(NewOrder::new(validated, pricing)).await {
            Ok(order) => order,
            Err(e) => {
                self.metrics.orders_rejected.with_label_values(&["internal"]).inc();
                tracing::error!(error = %e, "Failed to persist order");
                timer.observe_duration();
                return Err(SubmissionError::Internal(e));
            }
        };

        self.metrics.orders_submitted.inc();
        self.metrics.orders_stored.inc();
        tracing::info!(
            stage = %SubmissionStage::Persisted,
            order_id = %order.id,
            days = order.delivery_days.len(),
            total = order.total,
            "✅ Order created"
        );

        self.dispatch_relay(&order);
        timer.observe_duration();

        Ok(order)
    }

    pub async fn get(&self, id: Uuid) -> Result<Order, SubmissionError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Order>, SubmissionError> {
        Ok(self.store.list().await?)
    }

    fn dispatch_relay(&self, order: &Order) {
        let Some(relay) = &self.relay else {
            self.metrics.relay_deliveries.with_label_values(&["disabled"]).inc();
            tracing::debug!(order_id = %order.id, "Webhook relay disabled, skipping notification");
            return;
        };

        if !relay.connected() {
            self.metrics.relay_deliveries.with_label_values(&["dropped"]).inc();
            tracing::error!(order_id = %order.id, "Webhook relay is not running, notification dropped");
            return;
        }

        relay.do_send(NotifyOrder {
            order: order.clone(),
        });
        tracing::debug!(stage = %SubmissionStage::RelayDispatched, order_id = %order.id, "Order handed to webhook relay");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
