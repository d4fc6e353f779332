use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::{GENERATION_TIMEOUT, SIMULATED_GENERATION_DELAY};
use crate::planner::{DayFilter, MealTypeFilter};

/// Weekly meal planner: set preferences, review suggested recipes, then the grocery list.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with a meal plan to use instead of the built-in sample week.
    #[arg(long, global = true)]
    pub plan: Option<PathBuf>,

    /// JSON file with a grocery list to use instead of the built-in sample list.
    #[arg(long, global = true)]
    pub groceries: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the preferences form, generate a plan and review it.
    Preferences {
        /// Simulated generation delay in milliseconds.
        #[arg(long, default_value_t = SIMULATED_GENERATION_DELAY.as_millis() as u64)]
        delay_ms: u64,

        /// Give up on generation after this many seconds.
        #[arg(long, default_value_t = GENERATION_TIMEOUT.as_secs())]
        timeout_secs: u64,
    },

    /// Show recipe suggestions for the week.
    Suggestions {
        /// Day to show ("All" or a weekday).
        #[arg(long, default_value = "All")]
        day: DayFilter,

        /// Meal type to show ("All", Breakfast, Lunch, Dinner or Snack).
        #[arg(long, default_value = "All")]
        meal_type: MealTypeFilter,

        /// Accept a recipe by id (repeatable).
        #[arg(long = "accept", value_name = "RECIPE_ID")]
        accept: Vec<String>,

        /// Accept every recipe in the plan.
        #[arg(long)]
        accept_all: bool,

        /// Request a different suggestion for a recipe (repeatable).
        #[arg(long = "reject", value_name = "RECIPE_ID")]
        reject: Vec<String>,

        /// Show details for a recipe.
        #[arg(long, value_name = "RECIPE_ID")]
        view: Option<String>,

        /// Review the suggestions interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Review the grocery list.
    Groceries {
        /// Adjust a quantity, e.g. `2=+1` or `1=-3` (repeatable).
        #[arg(long = "adjust", value_name = "ID=DELTA", value_parser = parse_adjustment)]
        adjust: Vec<(String, i64)>,

        /// Prefer organic products.
        #[arg(long)]
        organic_only: bool,

        /// Preferred brands, comma separated.
        #[arg(long, default_value = "")]
        brands: String,

        /// Do not allow substitutions.
        #[arg(long)]
        no_substitutes: bool,

        /// Write the order sheet to this CSV file.
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Preferences {
            delay_ms: SIMULATED_GENERATION_DELAY.as_millis() as u64,
            timeout_secs: GENERATION_TIMEOUT.as_secs(),
        }
    }
}

/// Parse `ID=DELTA`, where delta may carry a sign.
pub fn parse_adjustment(s: &str) -> Result<(String, i64), String> {
    let (id, delta) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=DELTA, got '{}'", s))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing item id in '{}'", s));
    }

    let delta = delta.trim();
    let delta: i64 = delta
        .strip_prefix('+')
        .unwrap_or(delta)
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", delta))?;

    Ok((id.to_string(), delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adjustment() {
        assert_eq!(parse_adjustment("2=+1").unwrap(), ("2".to_string(), 1));
        assert_eq!(parse_adjustment("1=-3").unwrap(), ("1".to_string(), -3));
        assert_eq!(parse_adjustment(" 7 = 4 ").unwrap(), ("7".to_string(), 4));
        assert!(parse_adjustment("2").is_err());
        assert!(parse_adjustment("=1").is_err());
        assert!(parse_adjustment("2=lots").is_err());
    }

    #[test]
    fn test_cli_parses_suggestion_filters() {
        let cli = Cli::parse_from([
            "meal_planner",
            "suggestions",
            "--day",
            "friday",
            "--meal-type",
            "dinner",
            "--accept",
            "r-1",
            "--accept",
            "r-2",
        ]);
        match cli.command {
            Some(Command::Suggestions {
                day,
                meal_type,
                accept,
                ..
            }) => {
                assert_eq!(day, DayFilter::Day(crate::models::Weekday::Friday));
                assert_eq!(meal_type, MealTypeFilter::Only(crate::models::MealType::Dinner));
                assert_eq!(accept, vec!["r-1", "r-2"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_day() {
        assert!(Cli::try_parse_from(["meal_planner", "suggestions", "--day", "Caturday"]).is_err());
    }
}
