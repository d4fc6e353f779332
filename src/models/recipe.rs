use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// One of the seven days a plan can cover, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Display name, e.g. "Monday".
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Lowercase token used for delivery days, e.g. "monday".
    pub fn token(&self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = PlannerError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.token() == wanted)
            .ok_or_else(|| PlannerError::UnknownDay(s.trim().to_string()))
    }
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|t| t.name().to_lowercase() == wanted)
            .ok_or_else(|| PlannerError::InvalidFilter(format!("unknown meal type '{}'", s.trim())))
    }
}

/// Nutritional facts for one serving.
///
/// Macros are in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFacts {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Divide every field by `n`. Zero divisor yields all zeros.
    pub fn averaged_over(&self, n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        let n = n as f64;
        Self::new(
            self.calories / n,
            self.protein / n,
            self.carbs / n,
            self.fat / n,
        )
    }
}

impl Add for NutritionFacts {
    type Output = NutritionFacts;

    fn add(self, rhs: Self) -> Self::Output {
        NutritionFacts::new(
            self.calories + rhs.calories,
            self.protein + rhs.protein,
            self.carbs + rhs.carbs,
            self.fat + rhs.fat,
        )
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionFacts::default(), Add::add)
    }
}

/// A suggested recipe.
///
/// Whether the user accepted it lives in the acceptance tracker, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub nutrition: NutritionFacts,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>, nutrition: NutritionFacts) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nutrition,
        }
    }
}

/// A meal slot filled with exactly one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub recipe: Recipe,
}

impl Meal {
    pub fn new(meal_type: MealType, recipe: Recipe) -> Self {
        Self { meal_type, recipe }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_parse_case_insensitive() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!(" SUNDAY ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!(matches!(
            "Funday".parse::<Weekday>(),
            Err(PlannerError::UnknownDay(_))
        ));
    }

    #[test]
    fn test_weekday_order() {
        assert!(Weekday::Monday < Weekday::Sunday);
        assert_eq!(Weekday::Wednesday.token(), "wednesday");
    }

    #[test]
    fn test_meal_type_parse() {
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_nutrition_sum_and_average() {
        let total: NutritionFacts = [
            NutritionFacts::new(300.0, 10.0, 40.0, 5.0),
            NutritionFacts::new(500.0, 30.0, 20.0, 15.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, NutritionFacts::new(800.0, 40.0, 60.0, 20.0));

        let avg = total.averaged_over(2);
        assert!((avg.calories - 400.0).abs() < 0.001);
        assert_eq!(total.averaged_over(0), NutritionFacts::default());
    }
}
