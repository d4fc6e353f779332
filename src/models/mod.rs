mod grocery;
mod plan;
mod preferences;
mod recipe;

pub use grocery::{GroceryItem, ShoppingPreferences};
pub use plan::{MealPlan, WeeklyTotals};
pub use preferences::{PreferencesDraft, SubmittedPreferences};
pub use recipe::{Meal, MealType, NutritionFacts, Recipe, Weekday};
