use serde::Serialize;

use super::value_objects::DeliveryDay;

// ============================================================================
// Pricing Engine
// ============================================================================
//
// subtotal = Σ days (Σ item unit prices) × people on that day
// fee      = flat fee × number of delivery days
// total    = subtotal + fee
//
// Always recomputed on the server from validated days.
//
// ============================================================================

pub const DEFAULT_DELIVERY_FEE_PER_DAY: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub delivery_fee_per_day: u64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            delivery_fee_per_day: DEFAULT_DELIVERY_FEE_PER_DAY,
        }
    }
}

impl PricingPolicy {
    pub fn new(delivery_fee_per_day: u64) -> Self {
        Self { delivery_fee_per_day }
    }

    pub fn price(&self, days: &[DeliveryDay]) -> PriceBreakdown {
        let subtotal = days
            .iter()
            .map(|day| day.per_person_price().saturating_mul(u64::from(day.number_of_people)))
            .fold(0u64, u64::saturating_add);

        // Days without dishes still count; fee is per delivery, not per dish.
        let delivery_fee = self.delivery_fee_per_day.saturating_mul(days.len() as u64);

        PriceBreakdown {
            subtotal,
            delivery_fee,
            total: subtotal.saturating_add(delivery_fee),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
