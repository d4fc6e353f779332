use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{PlannerError, Result};
use crate::models::{PreferencesDraft, SubmittedPreferences, Weekday};
use crate::planner::constants::{
    CALORIE_TARGET_STEP, COOKING_TIME_STEP, MAX_CALORIE_TARGET, MAX_COOKING_TIME, MIN_ADULTS,
    MIN_CALORIE_TARGET, MIN_COOKING_TIME,
};

/// A single-valued field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Goal(String),
    Adults(u32),
    Kids(u32),
    CookingTime(u32),
    CalorieTarget(u32),
    Budget(u32),
    DeliveryDay(Weekday),
}

impl DraftUpdate {
    /// Build an update from a field name and raw value.
    ///
    /// Field names ignore case, `_` and `-`, so "cookingTime",
    /// "cooking_time" and "cooking-time" are the same field.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let value = value.trim();
        match normalize_field(field).as_str() {
            "goal" => Ok(DraftUpdate::Goal(value.to_string())),
            "adults" => parse_count(field, value).map(DraftUpdate::Adults),
            "kids" => parse_count(field, value).map(DraftUpdate::Kids),
            "cookingtime" => parse_count(field, value).map(DraftUpdate::CookingTime),
            "calorietarget" => parse_count(field, value).map(DraftUpdate::CalorieTarget),
            "budget" => parse_count(field, value).map(DraftUpdate::Budget),
            "deliveryday" => value.parse::<Weekday>().map(DraftUpdate::DeliveryDay),
            _ => Err(PlannerError::UnknownField(field.to_string())),
        }
    }
}

/// A set-valued field that is edited by toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiValueField {
    DietaryRestrictions,
    Allergies,
    CuisinePreferences,
}

impl FromStr for MultiValueField {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_field(s).as_str() {
            "dietaryrestrictions" => Ok(MultiValueField::DietaryRestrictions),
            "allergies" => Ok(MultiValueField::Allergies),
            "cuisinepreferences" => Ok(MultiValueField::CuisinePreferences),
            _ => Err(PlannerError::UnknownField(s.to_string())),
        }
    }
}

impl PreferencesDraft {
    /// A draft holding the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field change.
    ///
    /// Numeric fields are kept in range: adults at least 1, cooking time in
    /// [10, 120] on a 5 minute step, calorie target in [1200, 4000] on a
    /// 50 calorie step.
    pub fn set_field(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Goal(goal) => self.goal = goal,
            DraftUpdate::Adults(n) => self.adults = n.max(MIN_ADULTS),
            DraftUpdate::Kids(n) => self.kids = n,
            DraftUpdate::CookingTime(minutes) => {
                self.cooking_time =
                    snap_to_step(minutes, MIN_COOKING_TIME, MAX_COOKING_TIME, COOKING_TIME_STEP)
            }
            DraftUpdate::CalorieTarget(calories) => {
                self.calorie_target = snap_to_step(
                    calories,
                    MIN_CALORIE_TARGET,
                    MAX_CALORIE_TARGET,
                    CALORIE_TARGET_STEP,
                )
            }
            DraftUpdate::Budget(amount) => self.budget = amount,
            DraftUpdate::DeliveryDay(day) => self.delivery_day = day,
        }
    }

    /// Parse and apply a field change given as text.
    pub fn set_field_str(&mut self, field: &str, value: &str) -> Result<()> {
        let update = DraftUpdate::parse(field, value)?;
        self.set_field(update);
        Ok(())
    }

    /// Add `value` to the field if absent, remove it if present.
    ///
    /// Returns whether the value is present afterwards.
    pub fn toggle_multi_value(&mut self, field: MultiValueField, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PlannerError::InvalidInput(
                "Cannot toggle an empty value".to_string(),
            ));
        }

        let set = self.multi_value_mut(field);
        if set.remove(value) {
            Ok(false)
        } else {
            set.insert(value.to_string());
            Ok(true)
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("preferences draft reset");
    }

    /// Freeze the draft for hand-off to plan generation.
    pub fn submit(self) -> SubmittedPreferences {
        tracing::info!(
            goal = self.goal.as_str(),
            adults = self.adults,
            kids = self.kids,
            calorie_target = self.calorie_target,
            budget = self.budget,
            delivery_day = %self.delivery_day,
            "preferences submitted"
        );
        SubmittedPreferences::new(self)
    }

    fn multi_value_mut(&mut self, field: MultiValueField) -> &mut BTreeSet<String> {
        match field {
            MultiValueField::DietaryRestrictions => &mut self.dietary_restrictions,
            MultiValueField::Allergies => &mut self.allergies,
            MultiValueField::CuisinePreferences => &mut self.cuisine_preferences,
        }
    }
}

fn normalize_field(field: &str) -> String {
    field
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| {
        PlannerError::InvalidInput(format!("'{}' is not a whole number for {}", value, field))
    })
}

/// Clamp to the allowed range, then round to the nearest step.
/// Clamp into `[min, max]`, then round to the nearest multiple of `step`.
fn snap_to_step(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    let snapped = (clamped + step / 2) / step * step;
    snapped.clamp(min, max)
}
