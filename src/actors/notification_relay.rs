use actix::prelude::*;
use std::sync::Arc;

use crate::domain::order::Order;
use crate::messaging::{RelayError, WebhookClient};
use crate::metrics::Metrics;

// ============================================================================
// Notification Relay Actor
// ============================================================================
//
// Forwards persisted orders to the external webhook.
// - One attempt per order, no retry, no backoff, no dead-letter queue
// - Outcome is logged and counted, never returned to the submitter
// - Each delivery runs as its own future, so a slow endpoint does not hold
//   back the mailbox
//
// A failed delivery loses that notification for good.
//
// ============================================================================

pub struct NotificationRelay {
    webhook: WebhookClient,
    metrics: Arc<Metrics>,
}

impl NotificationRelay {
    pub fn new(webhook: WebhookClient, metrics: Arc<Metrics>) -> Self {
        Self { webhook, metrics }
    }
}

impl Actor for NotificationRelay {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!(url = %self.webhook.url(), "NotificationRelay started");
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct NotifyOrder {
    pub order: Order,
}

// ============================================================================
// Handlers
// ============================================================================

impl Handler<NotifyOrder> for NotificationRelay {
    type Result = ResponseFuture<()>;

    fn handle(&mut self, msg: NotifyOrder, _: &mut Self::Context) -> Self::Result {
        let webhook = self.webhook.clone();
        let metrics = self.metrics.clone();
        let order = msg.order;

        Box::pin(async move {
            tracing::debug!(order_id = %order.id, "Sending order to webhook");

            match webhook.deliver(&order).await {
                Ok(status) => {
                    metrics.relay_deliveries.with_label_values(&["delivered"]).inc();
                    tracing::info!(
                        order_id = %order.id,
                        status = status.as_u16(),
                        "📨 Order delivered to webhook"
                    );
                }
                Err(RelayError::Rejected(status)) => {
                    metrics.relay_deliveries.with_label_values(&["rejected"]).inc();
                    tracing::error!(
                        order_id = %order.id,
                        status = status.as_u16(),
                        "Webhook rejected order, notification dropped"
                    );
                }
                Err(e @ RelayError::Network(_)) => {
                    metrics.relay_deliveries.with_label_values(&["unreachable"]).inc();
                    tracing::error!(
                        order_id = %order.id,
                        error = %e,
                        "Failed to reach webhook, notification dropped"
                    );
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{NewOrder, PriceBreakdown, ValidatedOrder};
    use chrono::Utc;
    use reqwest::Url;
    use std::time::Duration;
    use uuid::Uuid;

    #[actix::test]
    async fn test_unreachable_webhook_is_counted_not_raised() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let webhook = WebhookClient::new(
            Url::parse("http://127.0.0.1:9/hook").unwrap(),
            Duration::from_secs(2),
        )
        .unwrap();
        let relay = NotificationRelay::new(webhook, metrics.clone()).start();

        let order = NewOrder::new(
            ValidatedOrder {
                customer_name: "Ola".to_string(),
                customer_phone: "1".to_string(),
                customer_email: "ola@example.com".to_string(),
                delivery_days: vec![],
                special_instructions: None,
            },
            PriceBreakdown { subtotal: 0, delivery_fee: 0, total: 0 },
        )
        .into_order(Uuid::new_v4(), Utc::now());

        // `send` resolves once the handler future completes.
        relay.send(NotifyOrder { order }).await.unwrap();

        assert_eq!(
            metrics.relay_deliveries.with_label_values(&["unreachable"]).get(),
            1
        );
    }
}
