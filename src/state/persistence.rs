use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{GroceryItem, MealPlan, ShoppingPreferences};
use crate::state::GroceryQuantityLedger;

/// Load a meal plan from a JSON file.
///
/// The file maps day names to meal lists; a day with no meals is rejected.
pub fn load_meal_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let plan: MealPlan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Load a grocery list from a JSON file.
///
/// Deduplicates by id: the last occurrence wins but keeps the position of
/// the first.
pub fn load_grocery_list<P: AsRef<Path>>(path: P) -> Result<Vec<GroceryItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<GroceryItem> = serde_json::from_str(&content)?;
    Ok(dedup_by_id(items))
}

fn dedup_by_id(items: Vec<GroceryItem>) -> Vec<GroceryItem> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<GroceryItem> = Vec::with_capacity(items.len());

    for item in items {
        match position.get(&item.id) {
            Some(&idx) => deduped[idx] = item,
            None => {
                position.insert(item.id.clone(), deduped.len());
                deduped.push(item);
            }
        }
    }

    deduped
}

/// Write the order sheet handed to the grocery service.
///
/// One row per item with a positive quantity. Alternatives are left blank
/// when substitutions are not allowed.
pub fn export_order_sheet<P: AsRef<Path>>(
    path: P,
    ledger: &GroceryQuantityLedger,
    preferences: &ShoppingPreferences,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "category",
        "quantity",
        "unit",
        "substitutes",
        "organic_only",
        "preferred_brands",
    ])?;

    let brands = preferences.brands().join("; ");
    let order = ledger.to_order();

    for item in &order {
        let substitutes = if preferences.substitute_allowed {
            item.alternatives.join("; ")
        } else {
            String::new()
        };

        wtr.write_record([
            item.id.clone(),
            item.name.clone(),
            item.category.clone(),
            item.quantity.to_string(),
            item.unit.clone(),
            substitutes,
            preferences.organic_only.to_string(),
            brands.clone(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(rows = order.len(), "order sheet written");
    Ok(order.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_meal_plan() {
        let json = r#"{
            "Tuesday": [
                {"type": "Lunch", "recipe": {"id": "r-2", "name": "Soup", "nutrition": {"calories": 400, "protein": 20, "carbs": 50, "fat": 10}}}
            ],
            "Monday": [
                {"type": "Breakfast", "recipe": {"id": "r-1", "name": "Oats", "nutrition": {"calories": 350, "protein": 12, "carbs": 58, "fat": 8}}}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let plan = load_meal_plan(file.path()).unwrap();
        assert_eq!(plan.day_count(), 2);
        let ids: Vec<&str> = plan.recipe_ids().collect();
        assert_eq!(ids, vec!["r-1", "r-2"]);
    }

    #[test]
    fn test_load_meal_plan_rejects_unknown_day() {
        let json = r#"{"Caturday": [
            {"type": "Lunch", "recipe": {"id": "r-2", "name": "Soup", "nutrition": {"calories": 400, "protein": 20, "carbs": 50, "fat": 10}}}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_meal_plan(file.path()).is_err());
    }

    #[test]
    fn test_grocery_deduplication() {
        let json = r#"[
            {"id": "1", "name": "Oats", "category": "Grains", "quantity": 1, "unit": "lb", "alternatives": []},
            {"id": "2", "name": "Berries", "category": "Produce", "quantity": 2, "unit": "cups"},
            {"id": "1", "name": "Oats", "category": "Grains", "quantity": 4, "unit": "lb", "alternatives": ["Quick Oats"]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_grocery_list(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        // Last occurrence wins, first position kept
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[1].id, "2");
    }

    #[test]
    fn test_export_order_sheet() {
        let ledger = GroceryQuantityLedger::new(vec![
            GroceryItem::new("1", "Oats", "Grains", 1, "lb", &["Steel Cut Oats", "Quick Oats"]),
            GroceryItem::new("2", "Berries", "Produce", 0, "cups", &[]),
        ]);
        let prefs = ShoppingPreferences {
            organic_only: true,
            preferred_brands: "Acme, Green Farm".to_string(),
            substitute_allowed: true,
        };

        let out = NamedTempFile::new().unwrap();
        let rows = export_order_sheet(out.path(), &ledger, &prefs).unwrap();
        assert_eq!(rows, 1);

        let mut rdr = csv::Reader::from_path(out.path()).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][3], "1");
        assert_eq!(&records[0][5], "Steel Cut Oats; Quick Oats");
        assert_eq!(&records[0][6], "true");
        assert_eq!(&records[0][7], "Acme; Green Farm");
    }

    #[test]
    fn test_export_without_substitutes() {
        let ledger = GroceryQuantityLedger::new(vec![GroceryItem::new(
            "1",
            "Oats",
            "Grains",
            2,
            "lb",
            &["Quick Oats"],
        )]);
        let prefs = ShoppingPreferences {
            substitute_allowed: false,
            ..Default::default()
        };

        let out = NamedTempFile::new().unwrap();
        export_order_sheet(out.path(), &ledger, &prefs).unwrap();

        let mut rdr = csv::Reader::from_path(out.path()).unwrap();
        let record = rdr.records().next().unwrap().unwrap();
        assert_eq!(&record[5], "");
    }
}
