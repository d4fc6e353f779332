//! Built-in sample week and grocery list.

use std::collections::BTreeMap;

use crate::models::MealType::{Breakfast, Dinner, Lunch, Snack};
use crate::models::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};
use crate::models::{GroceryItem, Meal, MealPlan, MealType, NutritionFacts, Recipe, Weekday};

/// (day, meal type, recipe id, name, calories, protein, carbs, fat)
type Row = (Weekday, MealType, &'static str, &'static str, f64, f64, f64, f64);

const SAMPLE_WEEK: &[Row] = &[
    (Monday, Breakfast, "r-oat-berry", "Overnight Oats with Berries", 350.0, 12.0, 58.0, 8.0),
    (Monday, Lunch, "r-quinoa-bowl", "Mediterranean Quinoa Bowl", 520.0, 18.0, 64.0, 20.0),
    (Monday, Dinner, "r-salmon-veg", "Baked Salmon with Roasted Vegetables", 610.0, 42.0, 30.0, 34.0),
    (Tuesday, Breakfast, "r-greek-yogurt", "Greek Yogurt Parfait", 310.0, 20.0, 40.0, 7.0),
    (Tuesday, Lunch, "r-chicken-wrap", "Grilled Chicken Wrap", 480.0, 35.0, 45.0, 16.0),
    (Tuesday, Dinner, "r-veg-stirfry", "Tofu Vegetable Stir-Fry", 540.0, 24.0, 62.0, 20.0),
    (Tuesday, Snack, "r-hummus-veg", "Hummus and Veggie Sticks", 180.0, 6.0, 18.0, 9.0),
    (Wednesday, Breakfast, "r-avocado-toast", "Avocado Toast with Egg", 390.0, 16.0, 32.0, 22.0),
    (Wednesday, Lunch, "r-lentil-soup", "Red Lentil Soup", 430.0, 22.0, 60.0, 9.0),
    (Wednesday, Dinner, "r-turkey-chili", "Turkey Chili", 580.0, 44.0, 48.0, 22.0),
    (Thursday, Breakfast, "r-oat-berry", "Overnight Oats with Berries", 350.0, 12.0, 58.0, 8.0),
    (Thursday, Lunch, "r-caprese-salad", "Caprese Salad with Chickpeas", 460.0, 19.0, 38.0, 26.0),
    (Thursday, Dinner, "r-shrimp-tacos", "Shrimp Tacos with Slaw", 590.0, 36.0, 56.0, 22.0),
    (Friday, Breakfast, "r-smoothie", "Green Protein Smoothie", 330.0, 25.0, 42.0, 7.0),
    (Friday, Lunch, "r-sushi-bowl", "Salmon Sushi Bowl", 560.0, 30.0, 70.0, 16.0),
    (Friday, Dinner, "r-margherita", "Whole Wheat Margherita Pizza", 650.0, 28.0, 78.0, 24.0),
    (Friday, Snack, "r-trail-mix", "Dark Chocolate Trail Mix", 220.0, 6.0, 20.0, 14.0),
    (Saturday, Breakfast, "r-pancakes", "Banana Oat Pancakes", 420.0, 14.0, 68.0, 10.0),
    (Saturday, Lunch, "r-falafel", "Falafel Pita Plate", 540.0, 20.0, 66.0, 22.0),
    (Saturday, Dinner, "r-tikka-masala", "Chicken Tikka Masala with Rice", 690.0, 45.0, 72.0, 22.0),
    (Sunday, Breakfast, "r-shakshuka", "Shakshuka", 380.0, 20.0, 24.0, 22.0),
    (Sunday, Lunch, "r-pad-thai", "Vegetable Pad Thai", 560.0, 18.0, 80.0, 18.0),
    (Sunday, Dinner, "r-roast-chicken", "Herb Roast Chicken with Potatoes", 640.0, 48.0, 44.0, 28.0),
];

/// Sample week of suggestions covering all seven days.
pub fn sample_meal_plan() -> MealPlan {
    let mut days: BTreeMap<Weekday, Vec<Meal>> = BTreeMap::new();
    for &(day, meal_type, id, name, calories, protein, carbs, fat) in SAMPLE_WEEK {
        days.entry(day).or_default().push(Meal::new(
            meal_type,
            Recipe::new(id, name, NutritionFacts::new(calories, protein, carbs, fat)),
        ));
    }

    let plan = MealPlan::from_days(days);
    debug_assert!(plan.is_ok(), "sample week has an empty day");
    plan.unwrap_or_default()
}

/// Sample grocery list for the review page.
pub fn sample_grocery_list() -> Vec<GroceryItem> {
    vec![
        GroceryItem::new(
            "1",
            "Organic Rolled Oats",
            "Grains",
            1,
            "lb",
            &["Steel Cut Oats", "Quick Oats"],
        ),
        GroceryItem::new(
            "2",
            "Fresh Berries Mix",
            "Produce",
            2,
            "cups",
            &["Frozen Berry Mix", "Mixed Fruit"],
        ),
        GroceryItem::new("3", "Atlantic Salmon Fillet", "Seafood", 2, "lb", &["Steelhead Trout"]),
        GroceryItem::new("4", "Baby Spinach", "Produce", 1, "bag", &["Kale", "Arugula"]),
        GroceryItem::new("5", "Plain Greek Yogurt", "Dairy", 2, "tubs", &["Skyr"]),
        GroceryItem::new("6", "Chicken Breast", "Meat", 3, "lb", &["Chicken Thighs"]),
        GroceryItem::new("7", "Extra Firm Tofu", "Protein", 2, "blocks", &[]),
        GroceryItem::new("8", "Red Lentils", "Grains", 1, "lb", &["Yellow Split Peas"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_plan_covers_week() {
        let plan = sample_meal_plan();
        assert_eq!(plan.day_count(), 7);
        assert_eq!(plan.meal_count(), SAMPLE_WEEK.len());
    }

    #[test]
    fn test_sample_grocery_ids_unique() {
        let items = sample_grocery_list();
        let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
