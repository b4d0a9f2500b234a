use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// Menu Catalog - Static, read-only list of orderable dishes
// ============================================================================
//
// The catalog is supplied from outside the ordering core: either the built-in
// standard menu or a JSON file named by CATERING_MENU_PATH. It is loaded once
// at startup and never mutated afterwards.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Soup,
    Main,
    Dessert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(alias = "price")]
    pub unit_price: u32,
    pub category: Category,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(String),

    #[error("Catalog item id cannot be empty")]
    EmptyId,

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Load a catalog from a JSON array of items.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;
        Self::new(items)
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The house menu served when no catalog file is configured.
    pub fn standard_menu() -> Self {
        let items = vec![
            item("soup-tomato", "Zupa pomidorowa", "Kremowa zupa z świeżymi pomidorami", 15, Category::Soup),
            item("soup-broth", "Rosół z makaronem", "Tradycyjny rosół z kurczaka", 18, Category::Soup),
            item("soup-mushroom", "Zupa grzybowa", "Kremowa z leśnymi grzybami", 20, Category::Soup),
            item("soup-zurek", "Żurek", "Z białą kiełbasą i jajkiem", 16, Category::Soup),
            item("soup-broccoli", "Zupa brokułowa", "Zdrowa i pożywna", 17, Category::Soup),
            item("main-chicken", "Pierś z kurczaka grillowana", "Z ziołami i warzywami", 35, Category::Main),
            item("main-beef", "Stek wołowy", "Z sosem pieprzowym", 45, Category::Main),
            item("main-salmon", "Łosoś grillowany", "Ze szparagami", 40, Category::Main),
            item("main-pierogi", "Pierogi ruskie", "Z twarogiem i ziemniakami", 32, Category::Main),
            item("main-pork", "Polędwica wieprzowa", "W sosie grzybowym", 38, Category::Main),
            item("dessert-tiramisu", "Tiramisu", "Klasyczny włoski deser", 12, Category::Dessert),
            item("dessert-chocolate", "Czekoladowe lava cake", "Z lodami waniliowymi", 14, Category::Dessert),
            item("dessert-cheesecake", "Sernik", "Tradycyjny z owocami", 10, Category::Dessert),
            item("dessert-tart", "Tarta owocowa", "Sezonowe owoce", 11, Category::Dessert),
            item("dessert-panna", "Panna cotta", "Z sosem jagodowym", 13, Category::Dessert),
        ];

        Self { items }
    }
}

fn item(id: &str, name: &str, description: &str, unit_price: u32, category: Category) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unit_price,
        category,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
