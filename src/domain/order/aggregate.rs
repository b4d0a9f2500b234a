use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing::PriceBreakdown;
use super::validation::ValidatedOrder;
use super::value_objects::DeliveryDay;

// ============================================================================
// Order - Canonical persisted record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    // Identity
    pub id: Uuid,

    // Customer
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,

    // Contents
    pub delivery_days: Vec<DeliveryDay>,
    pub special_instructions: Option<String>,

    // Server-computed totals
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,

    // Audit
    pub created_at: DateTime<Utc>,
}

/// A validated and priced order waiting for an id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub details: ValidatedOrder,
    pub pricing: PriceBreakdown,
}

impl NewOrder {
    pub fn new(details: ValidatedOrder, pricing: PriceBreakdown) -> Self {
        Self { details, pricing }
    }

    pub fn into_order(self, id: Uuid, created_at: DateTime<Utc>) -> Order {
        let ValidatedOrder {
            customer_name,
            customer_phone,
            customer_email,
            delivery_days,
            special_instructions,
        } = self.details;

        Order {
            id,
            customer_name,
            customer_phone,
            customer_email,
            delivery_days,
            special_instructions,
            subtotal: self.pricing.subtotal,
            delivery_fee: self.pricing.delivery_fee,
            total: self.pricing.total,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_order_copies_pricing_and_identity() {
        let details = ValidatedOrder {
            customer_name: "Ewa".to_string(),
            customer_phone: "500".to_string(),
            customer_email: "ewa@example.com".to_string(),
            delivery_days: vec![],
            special_instructions: Some("Bez glutenu".to_string()),
        };
        let pricing = PriceBreakdown { subtotal: 80, delivery_fee: 20, total: 100 };

        let id = Uuid::new_v4();
        let now = Utc::now();
        let order = NewOrder::new(details, pricing).into_order(id, now);

        assert_eq!(order.id, id);
        assert_eq!(order.created_at, now);
        assert_eq!(order.total, 100);
        assert_eq!(order.special_instructions.as_deref(), Some("Bez glutenu"));
    }

    #[test]
    fn test_order_wire_format_is_camel_case() {
        let order = NewOrder::new(
            ValidatedOrder {
                customer_name: "Ewa".to_string(),
                customer_phone: "500".to_string(),
                customer_email: "ewa@example.com".to_string(),
                delivery_days: vec![],
                special_instructions: None,
            },
            PriceBreakdown { subtotal: 0, delivery_fee: 0, total: 0 },
        )
        .into_order(Uuid::new_v4(), Utc::now());

        let json = serde_json::to_value(&order).unwrap();
        for key in ["id", "customerName", "customerPhone", "customerEmail", "deliveryDays", "deliveryFee", "createdAt"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json["specialInstructions"].is_null());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
