use serde::{Deserialize, Serialize};

/// A line on the grocery list.
///
/// Only `quantity` changes after creation, and only through the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl GroceryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        unit: impl Into<String>,
        alternatives: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Quantity with its unit, e.g. "2 cups".
    pub fn amount(&self) -> String {
        format!("{} {}", self.quantity, self.unit)
    }
}

/// How the order should be shopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingPreferences {
    pub organic_only: bool,
    /// Free text, comma separated.
    pub preferred_brands: String,
    pub substitute_allowed: bool,
}

impl Default for ShoppingPreferences {
    fn default() -> Self {
        Self {
            organic_only: false,
            preferred_brands: String::new(),
            substitute_allowed: true,
        }
    }
}

impl ShoppingPreferences {
    /// Brand names split on commas, trimmed, blanks removed.
    pub fn brands(&self) -> Vec<String> {
        self.preferred_brands
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }
}
