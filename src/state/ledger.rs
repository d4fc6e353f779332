use std::collections::BTreeMap;

use crate::models::GroceryItem;

/// Grocery items with adjustable quantities.
///
/// Items keep the order they were added in. Only quantities change.
#[derive(Debug, Clone, Default)]
pub struct GroceryQuantityLedger {
    items: Vec<GroceryItem>,
}

impl GroceryQuantityLedger {
    /// Create a ledger from a list of items.
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add `delta` to an item's quantity, flooring at zero and saturating
    /// at `u32::MAX`.
    ///
    /// Returns the new quantity, or `None` when no item has that id; an
    /// unknown id leaves the ledger as it was.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Option<u32> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = id, delta, "ignoring adjustment for unknown grocery item");
            return None;
        };

        let updated = i64::from(item.quantity)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        item.quantity = updated as u32;
        tracing::debug!(item_id = id, delta, quantity = item.quantity, "quantity adjusted");
        Some(item.quantity)
    }

    /// All items in list order.
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    /// Items grouped by category; categories sorted, items in list order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&GroceryItem>> {
        let mut groups: BTreeMap<&str, Vec<&GroceryItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category.as_str()).or_default().push(item);
        }
        groups
    }

    /// Items with a positive quantity, i.e. what would be ordered.
    pub fn to_order(&self) -> Vec<&GroceryItem> {
        self.items.iter().filter(|item| item.quantity > 0).collect()
    }

    /// Count of items in the ledger.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the ledger has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
