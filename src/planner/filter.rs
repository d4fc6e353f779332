use std::fmt;
use std::str::FromStr;

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, MealType, Weekday};
use crate::planner::constants::{FILTER_ALL, SUGGESTION_THRESHOLD};

/// Which days survive filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(wanted) => *wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(FILTER_ALL),
            DayFilter::Day(day) => write!(f, "{}", day),
        }
    }
}

impl FromStr for DayFilter {
    type Err = PlannerError;

    /// "All" or a weekday name, case-insensitive.
    ///
    /// Unknown tokens carry a "did you mean" hint when one is close enough.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(DayFilter::All);
        }

        input.parse::<Weekday>().map(DayFilter::Day).map_err(|_| {
            match closest_day(input) {
                Some(day) => PlannerError::UnknownDay(format!("'{}' (did you mean {}?)", input, day)),
                None => PlannerError::UnknownDay(format!("'{}'", input)),
            }
        })
    }
}

/// Which meal types survive filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MealTypeFilter {
    #[default]
    All,
    Only(MealType),
}

impl MealTypeFilter {
    pub fn matches(&self, meal_type: MealType) -> bool {
        match self {
            MealTypeFilter::All => true,
            MealTypeFilter::Only(wanted) => *wanted == meal_type,
        }
    }
}

impl fmt::Display for MealTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealTypeFilter::All => f.write_str(FILTER_ALL),
            MealTypeFilter::Only(meal_type) => write!(f, "{}", meal_type),
        }
    }
}

impl FromStr for MealTypeFilter {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(MealTypeFilter::All);
        }
        input.parse::<MealType>().map(MealTypeFilter::Only)
    }
}

/// Restrict a plan to one day and/or one meal type.
///
/// Returns a new plan; the source is left as is. Days and meals keep their
/// relative order and days with no surviving meals are dropped.
pub fn filter_plan(plan: &MealPlan, day: DayFilter, meal_type: MealTypeFilter) -> MealPlan {
    plan.retain_meals(|d, meal| day.matches(d) && meal_type.matches(meal.meal_type))
}

/// Closest weekday to a misspelled token, if any is close enough.
fn closest_day(input: &str) -> Option<Weekday> {
    let input = input.to_lowercase();
    Weekday::ALL
        .into_iter()
        .map(|day| (day, jaro_winkler(&day.token(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(day, _)| day)
}
