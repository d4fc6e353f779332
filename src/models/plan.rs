use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{Meal, NutritionFacts, Weekday};

/// A week of meals keyed by day.
///
/// Every day present has at least one meal. Days iterate Monday first;
/// meals keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Weekday, Vec<Meal>>",
    into = "BTreeMap<Weekday, Vec<Meal>>"
)]
pub struct MealPlan {
    days: BTreeMap<Weekday, Vec<Meal>>,
}

impl MealPlan {
    /// Build a plan from day/meals pairs.
    ///
    /// Fails on a day with no meals or a day listed twice.
    pub fn from_days<I>(days: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Weekday, Vec<Meal>)>,
    {
        let mut map = BTreeMap::new();
        for (day, meals) in days {
            if meals.is_empty() {
                return Err(PlannerError::EmptyDay(day.to_string()));
            }
            if map.insert(day, meals).is_some() {
                return Err(PlannerError::InvalidInput(format!(
                    "{} appears more than once in the plan",
                    day
                )));
            }
        }
        Ok(Self { days: map })
    }

    /// Iterate days in week order with their meals.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Meal])> {
        self.days.iter().map(|(day, meals)| (*day, meals.as_slice()))
    }

    /// Meals for one day, if the day is planned.
    pub fn meals(&self, day: Weekday) -> Option<&[Meal]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Every meal in the plan, in display order.
    pub fn all_meals(&self) -> impl Iterator<Item = (Weekday, &Meal)> {
        self.days
            .iter()
            .flat_map(|(day, meals)| meals.iter().map(move |m| (*day, m)))
    }

    /// Recipe ids in display order. A recipe used twice appears twice.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.all_meals().map(|(_, meal)| meal.recipe.id.as_str())
    }

    /// First slot holding the given recipe.
    pub fn find_recipe(&self, recipe_id: &str) -> Option<(Weekday, &Meal)> {
        self.all_meals().find(|(_, meal)| meal.recipe.id == recipe_id)
    }

    /// Derive a new plan keeping only the meals `keep` accepts.
    ///
    /// Days left without meals are dropped, so the result upholds the
    /// non-empty invariant.
    pub fn retain_meals<F>(&self, mut keep: F) -> MealPlan
    where
        F: FnMut(Weekday, &Meal) -> bool,
    {
        let days = self
            .days
            .iter()
            .filter_map(|(day, meals)| {
                let kept: Vec<Meal> = meals.iter().filter(|m| keep(*day, *m)).cloned().collect();
                (!kept.is_empty()).then_some((*day, kept))
            })
            .collect();
        MealPlan { days }
    }

    /// Nutrition totals derived from the current meals.
    pub fn totals(&self) -> WeeklyTotals {
        WeeklyTotals::from_plan(self)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn meal_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl TryFrom<BTreeMap<Weekday, Vec<Meal>>> for MealPlan {
    type Error = PlannerError;

    fn try_from(days: BTreeMap<Weekday, Vec<Meal>>) -> Result<Self> {
        MealPlan::from_days(days)
    }
}

impl From<MealPlan> for BTreeMap<Weekday, Vec<Meal>> {
    fn from(plan: MealPlan) -> Self {
        plan.days
    }
}

/// Nutrition aggregated over a plan.
///
/// Only obtainable from a plan, so it can never drift from the meals it
/// summarises.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotals {
    total: NutritionFacts,
    per_day: Vec<(Weekday, NutritionFacts)>,
}

impl WeeklyTotals {
    pub fn from_plan(plan: &MealPlan) -> Self {
        let per_day: Vec<(Weekday, NutritionFacts)> = plan
            .days()
            .map(|(day, meals)| (day, meals.iter().map(|m| m.recipe.nutrition).sum()))
            .collect();
        let total = per_day.iter().map(|(_, n)| *n).sum();
        Self { total, per_day }
    }

    /// Sum over every meal of the week.
    pub fn total(&self) -> NutritionFacts {
        self.total
    }

    /// Totals per planned day, in week order.
    pub fn per_day(&self) -> &[(Weekday, NutritionFacts)] {
        &self.per_day
    }

    /// Average per planned day. Days without meals are not counted.
    pub fn daily_average(&self) -> NutritionFacts {
        self.total.averaged_over(self.per_day.len())
    }
}
