use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, MealType, Recipe, WeeklyTotals, Weekday};
use crate::planner::filter::{filter_plan, DayFilter, MealTypeFilter};

/// A request for a different suggestion in one slot of the plan.
///
/// Resolving it is up to whatever supplies suggestions; the plan keeps the
/// rejected recipe until a replacement is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRequest {
    pub recipe_id: String,
    pub day: Weekday,
    pub meal_type: MealType,
}

/// Holds the week's suggestions.
///
/// The plan is read-only once stored; totals are derived on every read.
#[derive(Debug, Clone)]
pub struct MealPlanStore {
    plan: MealPlan,
}

impl MealPlanStore {
    pub fn new(plan: MealPlan) -> Self {
        Self { plan }
    }

    /// The full plan.
    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Nutrition over the full plan.
    pub fn totals(&self) -> WeeklyTotals {
        self.plan.totals()
    }

    /// The plan restricted by day and meal type.
    pub fn filtered(&self, day: DayFilter, meal_type: MealTypeFilter) -> MealPlan {
        filter_plan(&self.plan, day, meal_type)
    }

    /// Look up a recipe for a detail view.
    pub fn view(&self, recipe_id: &str) -> Result<&Recipe> {
        let (day, meal) = self
            .plan
            .find_recipe(recipe_id)
            .ok_or_else(|| PlannerError::UnknownRecipe(recipe_id.to_string()))?;

        tracing::info!(recipe_id, %day, meal_type = %meal.meal_type, "viewing recipe details");
        Ok(&meal.recipe)
    }

    /// Record that the user wants a different suggestion.
    ///
    /// Does not change the plan. A recipe used in several slots is reported
    /// for its first slot.
    pub fn reject(&self, recipe_id: &str) -> Result<ReplacementRequest> {
        let (day, meal) = self
            .plan
            .find_recipe(recipe_id)
            .ok_or_else(|| PlannerError::UnknownRecipe(recipe_id.to_string()))?;

        let request = ReplacementRequest {
            recipe_id: recipe_id.to_string(),
            day,
            meal_type: meal.meal_type,
        };
        tracing::info!(
            recipe_id,
            %day,
            meal_type = %meal.meal_type,
            "requesting new recipe to replace rejected suggestion"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::mock_data::sample_meal_plan;

    #[test]
    fn test_reject_leaves_plan_untouched() {
        let store = MealPlanStore::new(sample_meal_plan());
        let before = store.plan().clone();

        let request = store.reject("r-salmon-veg").unwrap();
        assert_eq!(request.day, Weekday::Monday);
        assert_eq!(request.meal_type, MealType::Dinner);
        assert_eq!(store.plan(), &before);
    }

    #[test]
    fn test_reject_unknown_recipe() {
        let store = MealPlanStore::new(sample_meal_plan());
        assert!(matches!(
            store.reject("nope"),
            Err(PlannerError::UnknownRecipe(_))
        ));
    }

    #[test]
    fn test_view_returns_recipe() {
        let store = MealPlanStore::new(sample_meal_plan());
        let recipe = store.view("r-shakshuka").unwrap();
        assert_eq!(recipe.name, "Shakshuka");
        assert!(store.view("missing").is_err());
    }

    #[test]
    fn test_totals_match_plan() {
        let store = MealPlanStore::new(sample_meal_plan());
        let expected: f64 = store
            .plan()
            .all_meals()
            .map(|(_, m)| m.recipe.nutrition.calories)
            .sum();
        assert!((store.totals().total().calories - expected).abs() < 0.001);
    }

    #[test]
    fn test_repeated_recipe_reports_first_slot() {
        let store = MealPlanStore::new(sample_meal_plan());
        // Overnight oats is on Monday and Thursday
        let request = store.reject("r-oat-berry").unwrap();
        assert_eq!(request.day, Weekday::Monday);
    }
}
