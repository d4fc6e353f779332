use std::time::Duration;

use crate::models::Weekday;

// ─────────────────────────────────────────────────────────────────────────────
// Preference defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ADULTS: u32 = 2;
pub const DEFAULT_KIDS: u32 = 0;

/// Minutes per meal.
pub const DEFAULT_COOKING_TIME: u32 = 30;

/// Calories per day.
pub const DEFAULT_CALORIE_TARGET: u32 = 2000;

/// Weekly grocery budget.
pub const DEFAULT_BUDGET: u32 = 150;

pub const DEFAULT_DELIVERY_DAY: Weekday = Weekday::Monday;

// ─────────────────────────────────────────────────────────────────────────────
// Preference ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_ADULTS: u32 = 1;

pub const MIN_COOKING_TIME: u32 = 10;
pub const MAX_COOKING_TIME: u32 = 120;
pub const COOKING_TIME_STEP: u32 = 5;

pub const MIN_CALORIE_TARGET: u32 = 1200;
pub const MAX_CALORIE_TARGET: u32 = 4000;
pub const CALORIE_TARGET_STEP: u32 = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Form options
// ─────────────────────────────────────────────────────────────────────────────

pub const GOAL_OPTIONS: [&str; 4] = [
    "Lose Weight",
    "Maintain Weight",
    "Build Muscle",
    "Eat Healthier",
];

pub const DIETARY_OPTIONS: [&str; 8] = [
    "Vegetarian",
    "Vegan",
    "Pescatarian",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
    "Paleo",
    "Low-Carb",
];

pub const ALLERGY_OPTIONS: [&str; 8] = [
    "Nuts", "Shellfish", "Eggs", "Soy", "Milk", "Wheat", "Fish", "Peanuts",
];

pub const CUISINE_OPTIONS: [&str; 8] = [
    "Italian",
    "Mexican",
    "Japanese",
    "Indian",
    "Mediterranean",
    "Thai",
    "American",
    "Chinese",
];

// ─────────────────────────────────────────────────────────────────────────────
// Simulated generation
// ─────────────────────────────────────────────────────────────────────────────

/// Delay the simulated generator waits before answering.
pub const SIMULATED_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Upper bound on a generation request before it is abandoned.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

// ─────────────────────────────────────────────────────────────────────────────
// Matching
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Keyword accepted by both filters to mean "no restriction".
pub const FILTER_ALL: &str = "All";
