use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::Result;
use crate::models::{GroceryItem, MealPlan, MealType, PreferencesDraft, Weekday};
use crate::planner::{DayFilter, MealTypeFilter};
use crate::planner::constants::{
    ALLERGY_OPTIONS, CUISINE_OPTIONS, DIETARY_OPTIONS, GOAL_OPTIONS, MAX_CALORIE_TARGET,
    MAX_COOKING_TIME, MIN_CALORIE_TARGET, MIN_COOKING_TIME,
};
use crate::state::MultiValueField;

/// What the user chose to do with a filled-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Reset,
    Cancel,
}

/// Actions on the suggestions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Accept,
    Reject,
    View,
    AcceptAll,
    Reset,
    ChangeFilters,
    Continue,
    Quit,
}

/// Actions on the grocery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroceryAction {
    Increase,
    Decrease,
    ShoppingPreferences,
    Order,
    Quit,
}

/// Prompt for the goal. Picking "No specific goal" leaves it empty.
pub fn prompt_goal(draft: &mut PreferencesDraft) -> Result<()> {
    let mut options: Vec<&str> = GOAL_OPTIONS.to_vec();
    options.push("No specific goal");

    let selection = Select::new()
        .with_prompt("What is your main goal?")
        .items(&options)
        .default(options.len() - 1)
        .interact()?;

    let goal = GOAL_OPTIONS.get(selection).copied().unwrap_or("");
    draft.set_field_str("goal", goal)
}

/// Prompt for one of the set-valued fields, toggling each change.
pub fn prompt_multi_value(
    draft: &mut PreferencesDraft,
    field: MultiValueField,
    prompt: &str,
    options: &[&str],
) -> Result<()> {
    let current = match field {
        MultiValueField::DietaryRestrictions => draft.dietary_restrictions(),
        MultiValueField::Allergies => draft.allergies(),
        MultiValueField::CuisinePreferences => draft.cuisine_preferences(),
    };
    let defaults: Vec<bool> = options.iter().map(|o| current.contains(*o)).collect();

    let chosen = MultiSelect::new()
        .with_prompt(prompt)
        .items(options)
        .defaults(&defaults)
        .interact()?;

    for (idx, option) in options.iter().enumerate() {
        if chosen.contains(&idx) != defaults[idx] {
            draft.toggle_multi_value(field, option)?;
        }
    }
    Ok(())
}

/// Prompt for a whole-number field, showing the current value as default.
pub fn prompt_number(
    draft: &mut PreferencesDraft,
    field: &str,
    prompt: &str,
    current: u32,
) -> Result<()> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    draft.set_field_str(field, &input)
}

/// Prompt for the grocery delivery day.
pub fn prompt_delivery_day(draft: &mut PreferencesDraft) -> Result<()> {
    let options: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
    let current = Weekday::ALL
        .iter()
        .position(|d| *d == draft.delivery_day())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Preferred grocery delivery day")
        .items(&options)
        .default(current)
        .interact()?;

    draft.set_field_str("deliveryDay", options[selection])
}

/// Ask whether to generate, start over, or quit.
pub fn prompt_form_action() -> Result<FormAction> {
    let options = ["Generate Meal Plan", "Reset Form", "Cancel"];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => FormAction::Submit,
        1 => FormAction::Reset,
        _ => FormAction::Cancel,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every field of the preferences form.
pub fn fill_preferences_form(draft: &mut PreferencesDraft) -> Result<()> {
    prompt_goal(draft)?;
    prompt_multi_value(
        draft,
        MultiValueField::DietaryRestrictions,
        "Dietary restrictions (space to toggle)",
        &DIETARY_OPTIONS,
    )?;

    let adults = draft.adults();
    prompt_number(draft, "adults", "Adults", adults)?;
    let kids = draft.kids();
    prompt_number(draft, "kids", "Kids", kids)?;

    let cooking_time = draft.cooking_time();
    prompt_number(
        draft,
        "cookingTime",
        &format!(
            "Max cooking time per meal in minutes ({}-{})",
            MIN_COOKING_TIME, MAX_COOKING_TIME
        ),
        cooking_time,
    )?;

    let calorie_target = draft.calorie_target();
    prompt_number(
        draft,
        "calorieTarget",
        &format!(
            "Daily calories ({}-{})",
            MIN_CALORIE_TARGET, MAX_CALORIE_TARGET
        ),
        calorie_target,
    )?;

    prompt_multi_value(
        draft,
        MultiValueField::Allergies,
        "Allergies & intolerances (space to toggle)",
        &ALLERGY_OPTIONS,
    )?;
    prompt_multi_value(
        draft,
        MultiValueField::CuisinePreferences,
        "Cuisine preferences (space to toggle)",
        &CUISINE_OPTIONS,
    )?;

    let budget = draft.budget();
    prompt_number(draft, "budget", "Weekly grocery budget", budget)?;
    prompt_delivery_day(draft)?;

    Ok(())
}

/// Ask what to do on the suggestions page.
pub fn prompt_review_action() -> Result<ReviewAction> {
    let options = [
        ("Accept a recipe", ReviewAction::Accept),
        ("Request a different recipe", ReviewAction::Reject),
        ("View recipe details", ReviewAction::View),
        ("Accept all recipes", ReviewAction::AcceptAll),
        ("Reset plan", ReviewAction::Reset),
        ("Change filters", ReviewAction::ChangeFilters),
        ("Continue to grocery list", ReviewAction::Continue),
        ("Quit", ReviewAction::Quit),
    ];
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(ReviewAction::Quit))
}

/// Pick one of the meals shown. `None` when nothing is shown or the user backs out.
pub fn prompt_recipe(plan: &MealPlan, prompt: &str) -> Result<Option<String>> {
    let meals: Vec<(Weekday, &str, &str, MealType)> = plan
        .all_meals()
        .map(|(day, meal)| {
            (
                day,
                meal.recipe.id.as_str(),
                meal.recipe.name.as_str(),
                meal.meal_type,
            )
        })
        .collect();

    if meals.is_empty() {
        println!("No recipes shown.");
        return Ok(None);
    }

    let mut labels: Vec<String> = meals
        .iter()
        .map(|(day, _, name, meal_type)| format!("{} {}: {}", day, meal_type, name))
        .collect();
    labels.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(meals.get(selection).map(|(_, id, _, _)| id.to_string()))
}

/// Prompt for the day and meal-type filters.
pub fn prompt_filters(
    day: DayFilter,
    meal_type: MealTypeFilter,
) -> Result<(DayFilter, MealTypeFilter)> {
    let day_options: Vec<DayFilter> = std::iter::once(DayFilter::All)
        .chain(Weekday::ALL.into_iter().map(DayFilter::Day))
        .collect();
    let day_labels: Vec<String> = day_options.iter().map(|d| d.to_string()).collect();
    let day_idx = Select::new()
        .with_prompt("Show day")
        .items(&day_labels)
        .default(day_options.iter().position(|d| *d == day).unwrap_or(0))
        .interact()?;

    let type_options: Vec<MealTypeFilter> = std::iter::once(MealTypeFilter::All)
        .chain(MealType::ALL.into_iter().map(MealTypeFilter::Only))
        .collect();
    let type_labels: Vec<String> = type_options.iter().map(|t| t.to_string()).collect();
    let type_idx = Select::new()
        .with_prompt("Show meal type")
        .items(&type_labels)
        .default(type_options.iter().position(|t| *t == meal_type).unwrap_or(0))
        .interact()?;

    Ok((
        day_options.get(day_idx).copied().unwrap_or_default(),
        type_options.get(type_idx).copied().unwrap_or_default(),
    ))
}

/// Ask what to do on the grocery page.
pub fn prompt_grocery_action() -> Result<GroceryAction> {
    let options = [
        ("Increase a quantity", GroceryAction::Increase),
        ("Decrease a quantity", GroceryAction::Decrease),
        ("Shopping preferences", GroceryAction::ShoppingPreferences),
        ("Continue to order", GroceryAction::Order),
        ("Quit", GroceryAction::Quit),
    ];
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(GroceryAction::Quit))
}

/// Pick a grocery item by name. `None` when the user backs out.
pub fn prompt_grocery_item(items: &[GroceryItem]) -> Result<Option<String>> {
    let mut labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.amount()))
        .collect();
    labels.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Which item?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(items.get(selection).map(|item| item.id.clone()))
}

/// Prompt for free text with a default.
pub fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
