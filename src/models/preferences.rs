use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Weekday;
use crate::planner::constants::{
    DEFAULT_ADULTS, DEFAULT_BUDGET, DEFAULT_CALORIE_TARGET, DEFAULT_COOKING_TIME,
    DEFAULT_DELIVERY_DAY, DEFAULT_KIDS,
};

/// In-progress preference selections.
///
/// Fields are read through accessors; changes go through the transitions in
/// `state::draft` so range constraints hold at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencesDraft {
    pub(crate) goal: String,
    pub(crate) dietary_restrictions: BTreeSet<String>,
    pub(crate) allergies: BTreeSet<String>,
    pub(crate) cuisine_preferences: BTreeSet<String>,
    pub(crate) adults: u32,
    pub(crate) kids: u32,
    pub(crate) cooking_time: u32,
    pub(crate) calorie_target: u32,
    pub(crate) budget: u32,
    pub(crate) delivery_day: Weekday,
}

impl Default for PreferencesDraft {
    fn default() -> Self {
        Self {
            goal: String::new(),
            dietary_restrictions: BTreeSet::new(),
            allergies: BTreeSet::new(),
            cuisine_preferences: BTreeSet::new(),
            adults: DEFAULT_ADULTS,
            kids: DEFAULT_KIDS,
            cooking_time: DEFAULT_COOKING_TIME,
            calorie_target: DEFAULT_CALORIE_TARGET,
            budget: DEFAULT_BUDGET,
            delivery_day: DEFAULT_DELIVERY_DAY,
        }
    }
}

impl PreferencesDraft {
    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn dietary_restrictions(&self) -> &BTreeSet<String> {
        &self.dietary_restrictions
    }

    pub fn allergies(&self) -> &BTreeSet<String> {
        &self.allergies
    }

    pub fn cuisine_preferences(&self) -> &BTreeSet<String> {
        &self.cuisine_preferences
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn kids(&self) -> u32 {
        self.kids
    }

    /// Maximum cooking time per meal, in minutes.
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn calorie_target(&self) -> u32 {
        self.calorie_target
    }

    /// Weekly grocery budget in whole currency units.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn delivery_day(&self) -> Weekday {
        self.delivery_day
    }

    /// Total people to cook for.
    pub fn servings(&self) -> u32 {
        self.adults + self.kids
    }
}

/// A draft that has been submitted and can no longer change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedPreferences(PreferencesDraft);

impl SubmittedPreferences {
    pub(crate) fn new(draft: PreferencesDraft) -> Self {
        Self(draft)
    }
}

impl std::ops::Deref for SubmittedPreferences {
    type Target = PreferencesDraft;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
