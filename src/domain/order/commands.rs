use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Order Commands - Untrusted client intent
// ============================================================================
//
// These types mirror the JSON a client posts. Every rule-checked field is
// optional, and the headcount is kept as raw JSON, so missing, null,
// fractional or out-of-range values surface as validation errors with a field
// name instead of an opaque deserialization failure. Server-derived fields
// (id, createdAt, subtotal, deliveryFee, total) are not declared and are
// therefore dropped on arrival.
//
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitOrder {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub delivery_days: Vec<DeliveryDayInput>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryDayInput {
    pub date: Option<String>,
    pub number_of_people: Option<Value>,
    pub selected_items: Vec<ItemSelection>,
}

/// Only the id is read; name, price and category are taken from the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemSelection {
    pub id: String,
}
