pub mod constants;
pub mod filter;
pub mod generation;
pub mod mock_data;

pub use filter::{filter_plan, DayFilter, MealTypeFilter};
pub use generation::{request_plan, MealPlanGenerator, SimulatedGenerator};
pub use mock_data::{sample_grocery_list, sample_meal_plan};
