pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{GroceryItem, Meal, MealPlan, PreferencesDraft, Recipe, WeeklyTotals};
pub use state::{AcceptanceTracker, GroceryQuantityLedger, MealPlanStore};
