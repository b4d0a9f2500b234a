use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, Category};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Snapshot of a catalog item taken when it was picked for a day.
/// Stored denormalized so persisted orders do not shift when the menu does.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    pub id: String,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: u32,
    pub category: Category,
}

impl From<&CatalogItem> for SelectedItem {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            category: item.category,
        }
    }
}

/// One calendar day of the order with its own headcount and dishes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDay {
    pub date: NaiveDate,
    pub number_of_people: u32,
    pub selected_items: Vec<SelectedItem>,
}

impl DeliveryDay {
    /// Sum of unit prices for one person on this day.
    pub fn per_person_price(&self) -> u64 {
        self.selected_items
            .iter()
            .map(|item| u64::from(item.unit_price))
            .sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(id: &str, price: u32) -> SelectedItem {
        SelectedItem {
            id: id.to_string(),
            name: id.to_string(),
            unit_price: price,
            category: Category::Main,
        }
    }

    #[test]
    fn test_per_person_price_counts_duplicates() {
        let day = DeliveryDay {
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            number_of_people: 4,
            selected_items: vec![selected("a", 10), selected("a", 10), selected("b", 5)],
        };

        assert_eq!(day.per_person_price(), 25);
    }

    #[test]
    fn test_delivery_day_wire_format() {
        let day = DeliveryDay {
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            number_of_people: 3,
            selected_items: vec![selected("main-beef", 45)],
        };

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2026-11-02");
        assert_eq!(json["numberOfPeople"], 3);
        assert_eq!(json["selectedItems"][0]["unitPrice"], 45);
        assert_eq!(json["selectedItems"][0]["category"], "main");
    }

    #[test]
    fn test_selected_item_snapshot_from_catalog() {
        let catalog_item = CatalogItem {
            id: "dessert-tart".to_string(),
            name: "Tarta owocowa".to_string(),
            description: "Sezonowe owoce".to_string(),
            unit_price: 11,
            category: Category::Dessert,
        };

        let snapshot = SelectedItem::from(&catalog_item);
        assert_eq!(snapshot.id, "dessert-tart");
        assert_eq!(snapshot.unit_price, 11);
        assert_eq!(snapshot.category, Category::Dessert);
    }
}
