mod acceptance;
mod draft;
mod ledger;
mod persistence;
mod plan_store;

pub use acceptance::{AcceptanceTracker, RecipeView};
pub use draft::{DraftUpdate, MultiValueField};
pub use ledger::GroceryQuantityLedger;
pub use persistence::{export_order_sheet, load_grocery_list, load_meal_plan};
pub use plan_store::{MealPlanStore, ReplacementRequest};
