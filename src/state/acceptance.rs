use std::collections::HashSet;

use crate::models::{MealPlan, MealType, Recipe, Weekday};

/// A recipe as displayed, with its selection flag worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView<'a> {
    pub day: Weekday,
    pub meal_type: MealType,
    pub recipe: &'a Recipe,
    pub is_selected: bool,
}

/// Tracks which suggested recipes the user has accepted.
#[derive(Debug, Clone, Default)]
pub struct AcceptanceTracker {
    accepted: HashSet<String>,
}

impl AcceptanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a recipe accepted. Returns false if it already was.
    pub fn accept(&mut self, recipe_id: &str) -> bool {
        let added = self.accepted.insert(recipe_id.to_string());
        if added {
            tracing::debug!(recipe_id, "recipe accepted");
        }
        added
    }

    /// Accept exactly the recipes present in `plan`.
    ///
    /// Replaces the current set, so ids accepted earlier that are not in the
    /// plan are dropped.
    pub fn accept_all(&mut self, plan: &MealPlan) {
        self.accepted = plan.recipe_ids().map(str::to_string).collect();
        tracing::debug!(count = self.accepted.len(), "accepted all recipes");
    }

    /// Forget every acceptance.
    pub fn reset(&mut self) {
        self.accepted.clear();
        tracing::debug!("acceptances reset");
    }

    pub fn is_accepted(&self, recipe_id: &str) -> bool {
        self.accepted.contains(recipe_id)
    }

    /// Number of distinct accepted recipes.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Every meal of `plan` in display order, flagged from this tracker.
    pub fn annotate<'a>(&self, plan: &'a MealPlan) -> Vec<RecipeView<'a>> {
        plan.all_meals()
            .map(|(day, meal)| RecipeView {
                day,
                meal_type: meal.meal_type,
                recipe: &meal.recipe,
                is_selected: self.is_accepted(&meal.recipe.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::mock_data::sample_meal_plan;

    #[test]
    fn test_accept_is_idempotent() {
        let mut tracker = AcceptanceTracker::new();
        assert!(tracker.accept("r-1"));
        assert!(!tracker.accept("r-1"));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_accepted("r-1"));
    }

    #[test]
    fn test_accept_all_replaces_set() {
        let plan = sample_meal_plan();
        let mut tracker = AcceptanceTracker::new();
        tracker.accept("not-in-plan");

        tracker.accept_all(&plan);

        assert!(!tracker.is_accepted("not-in-plan"));
        for id in plan.recipe_ids() {
            assert!(tracker.is_accepted(id));
        }
    }

    #[test]
    fn test_reset_clears() {
        let plan = sample_meal_plan();
        let mut tracker = AcceptanceTracker::new();
        tracker.accept_all(&plan);
        assert!(!tracker.is_empty());

        tracker.reset();
        assert!(tracker.is_empty());
        assert!(plan.recipe_ids().all(|id| !tracker.is_accepted(id)));
    }

    #[test]
    fn test_annotate_flags_selection() {
        let plan = sample_meal_plan();
        let mut tracker = AcceptanceTracker::new();
        tracker.accept("r-shakshuka");

        let views = tracker.annotate(&plan);
        assert_eq!(views.len(), plan.meal_count());
        let selected: Vec<&str> = views
            .iter()
            .filter(|v| v.is_selected)
            .map(|v| v.recipe.id.as_str())
            .collect();
        assert_eq!(selected, vec!["r-shakshuka"]);
    }
}
