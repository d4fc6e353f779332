use crate::models::{
    MealPlan, NutritionFacts, PreferencesDraft, Recipe, ShoppingPreferences, WeeklyTotals,
};
use crate::planner::{DayFilter, MealTypeFilter};
use crate::state::{AcceptanceTracker, GroceryQuantityLedger, ReplacementRequest};

/// Display weekly nutrition totals.
pub fn display_weekly_totals(totals: &WeeklyTotals) {
    println!();
    println!("=== Nutritional Overview ===");
    println!();
    println!("{:<14} {}", "Week total:", format_nutrition(&totals.total()));
    println!("{:<14} {}", "Daily average:", format_nutrition(&totals.daily_average()));
    println!();
}

/// Display the (filtered) plan with each recipe's acceptance mark.
pub fn display_suggestions(
    plan: &MealPlan,
    tracker: &AcceptanceTracker,
    day: DayFilter,
    meal_type: MealTypeFilter,
) {
    println!("=== Your Weekly Meal Plan (day: {}, meal: {}) ===", day, meal_type);

    if plan.is_empty() {
        println!();
        println!("No meals match the selected filters.");
        println!();
        return;
    }

    let views = tracker.annotate(plan);
    let max_name_len = views.iter().map(|v| v.recipe.name.len()).max().unwrap_or(10);

    let mut current_day = None;
    for view in &views {
        if current_day != Some(view.day) {
            current_day = Some(view.day);
            println!();
            println!("--- {} ---", view.day);
        }

        let mark = if view.is_selected { "[x]" } else { "[ ]" };
        println!(
            "  {} {:<9} {:<width$}  {:>4.0} cal  ({})",
            mark,
            view.meal_type.name(),
            view.recipe.name,
            view.recipe.nutrition.calories,
            view.recipe.id,
            width = max_name_len
        );
    }

    let accepted = views.iter().filter(|v| v.is_selected).count();
    println!();
    println!("Accepted: {} of {} shown", accepted, views.len());
    println!();
}

/// Display one recipe's details.
pub fn display_recipe(recipe: &Recipe, is_selected: bool) {
    println!();
    println!("=== {} ===", recipe.name);
    println!("Id: {}", recipe.id);
    println!("Nutrition: {}", format_nutrition(&recipe.nutrition));
    println!("Accepted: {}", yes_no(is_selected));
    println!();
}

/// Display replacement requests raised by rejections.
pub fn display_replacement_requests(requests: &[ReplacementRequest]) {
    for request in requests {
        println!(
            "Requested a new suggestion for {} {} (replacing {})",
            request.day, request.meal_type, request.recipe_id
        );
    }
}

/// Display the grocery list grouped by category.
pub fn display_grocery_list(ledger: &GroceryQuantityLedger, preferences: &ShoppingPreferences) {
    println!();
    println!("=== Grocery List ({} items) ===", ledger.len());

    if ledger.is_empty() {
        println!("(none)");
        println!();
        return;
    }

    for (category, items) in ledger.by_category() {
        println!();
        println!("--- {} ---", category);
        for item in items {
            println!("  [{}] {} - {}", item.id, item.name, item.amount());
            if !item.alternatives.is_empty() {
                println!("      Alternatives: {}", item.alternatives.join(", "));
            }
        }
    }

    println!();
    println!("--- Shopping Preferences ---");
    println!("Organic only: {}", yes_no(preferences.organic_only));
    let brands = preferences.brands();
    if !brands.is_empty() {
        println!("Preferred brands: {}", brands.join(", "));
    }
    println!("Substitutions allowed: {}", yes_no(preferences.substitute_allowed));
    println!();
}

/// Display a summary of the submitted preferences.
pub fn display_preferences(draft: &PreferencesDraft) {
    let list = |set: &std::collections::BTreeSet<String>| {
        if set.is_empty() {
            "none".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };

    println!();
    println!("=== Preferences ===");
    println!(
        "Goal: {}",
        if draft.goal().is_empty() { "none" } else { draft.goal() }
    );
    println!("Dietary restrictions: {}", list(draft.dietary_restrictions()));
    println!("Allergies: {}", list(draft.allergies()));
    println!("Cuisines: {}", list(draft.cuisine_preferences()));
    println!("Servings: {} adults, {} kids", draft.adults(), draft.kids());
    println!("Max cooking time: {} min", draft.cooking_time());
    println!("Daily calories: {}", draft.calorie_target());
    println!("Budget: {}", draft.budget());
    println!("Delivery day: {}", draft.delivery_day());
    println!();
}

fn format_nutrition(n: &NutritionFacts) -> String {
    format!(
        "{:.0} cal | P {:.0}g C {:.0}g F {:.0}g",
        n.calories, n.protein, n.carbs, n.fat
    )
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
