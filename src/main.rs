use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use weekly_meal_planner_rs::cli::{Cli, Command};
use weekly_meal_planner_rs::error::{PlannerError, Result};
use weekly_meal_planner_rs::interface::{
    display_grocery_list, display_preferences, display_recipe, display_replacement_requests,
    display_suggestions, display_weekly_totals, fill_preferences_form, prompt_filters,
    prompt_form_action, prompt_grocery_action, prompt_grocery_item, prompt_recipe,
    prompt_review_action, prompt_text, prompt_yes_no, FormAction, GroceryAction, ReviewAction,
};
use weekly_meal_planner_rs::models::{GroceryItem, MealPlan, PreferencesDraft, ShoppingPreferences};
use weekly_meal_planner_rs::planner::{
    request_plan, sample_grocery_list, sample_meal_plan, DayFilter, MealTypeFilter,
    SimulatedGenerator,
};
use weekly_meal_planner_rs::state::{
    export_order_sheet, load_grocery_list, load_meal_plan, AcceptanceTracker,
    GroceryQuantityLedger, MealPlanStore,
};

const DEFAULT_ORDER_FILE: &str = "grocery_order.csv";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let plan = load_plan(cli.plan.as_deref())?;
    let groceries = load_groceries(cli.groceries.as_deref())?;

    match command {
        Command::Preferences {
            delay_ms,
            timeout_secs,
        } => cmd_preferences(
            plan,
            groceries,
            Duration::from_millis(delay_ms),
            Duration::from_secs(timeout_secs),
        ),
        Command::Suggestions {
            day,
            meal_type,
            accept,
            accept_all,
            reject,
            view,
            interactive,
        } => {
            let store = MealPlanStore::new(plan);
            let mut tracker = AcceptanceTracker::new();

            if accept_all {
                tracker.accept_all(store.plan());
            }
            for id in &accept {
                if store.plan().find_recipe(id).is_none() {
                    return Err(PlannerError::UnknownRecipe(id.clone()));
                }
                tracker.accept(id);
            }

            let requests = reject
                .iter()
                .map(|id| store.reject(id))
                .collect::<Result<Vec<_>>>()?;
            display_replacement_requests(&requests);

            if let Some(id) = view {
                let recipe = store.view(&id)?;
                display_recipe(recipe, tracker.is_accepted(&id));
            }

            if interactive {
                if review_suggestions(&store, &mut tracker, day, meal_type)? {
                    review_groceries(GroceryQuantityLedger::new(groceries))?;
                }
                return Ok(());
            }

            display_weekly_totals(&store.totals());
            display_suggestions(&store.filtered(day, meal_type), &tracker, day, meal_type);
            Ok(())
        }
        Command::Groceries {
            adjust,
            organic_only,
            brands,
            no_substitutes,
            export,
        } => {
            let mut ledger = GroceryQuantityLedger::new(groceries);
            for (id, delta) in &adjust {
                if ledger.adjust_quantity(id, *delta).is_none() {
                    println!("No grocery item with id '{}'; skipped.", id);
                }
            }

            let preferences = ShoppingPreferences {
                organic_only,
                preferred_brands: brands,
                substitute_allowed: !no_substitutes,
            };
            display_grocery_list(&ledger, &preferences);

            if let Some(path) = export {
                let rows = export_order_sheet(&path, &ledger, &preferences)?;
                println!("Order sheet with {} items written to {}", rows, path.display());
            }
            Ok(())
        }
    }
}

fn load_plan(path: Option<&Path>) -> Result<MealPlan> {
    match path {
        Some(path) => load_meal_plan(path),
        None => Ok(sample_meal_plan()),
    }
}

fn load_groceries(path: Option<&Path>) -> Result<Vec<GroceryItem>> {
    match path {
        Some(path) => load_grocery_list(path),
        None => Ok(sample_grocery_list()),
    }
}

/// Fill in the form, generate a plan, then review suggestions and groceries.
fn cmd_preferences(
    plan: MealPlan,
    groceries: Vec<GroceryItem>,
    delay: Duration,
    timeout: Duration,
) -> Result<()> {
    let mut draft = PreferencesDraft::new();

    loop {
        fill_preferences_form(&mut draft)?;
        display_preferences(&draft);

        match prompt_form_action()? {
            FormAction::Submit => break,
            FormAction::Reset => {
                draft.reset();
                println!("Form reset to defaults.");
            }
            FormAction::Cancel => return Ok(()),
        }
    }

    let submitted = draft.submit();
    let generator = SimulatedGenerator::new(plan, delay);

    println!("Generating your meal plan... (Ctrl-C to cancel)");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let cancel = CancellationToken::new();

    let outcome = runtime.block_on(async {
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });
        request_plan(&generator, &submitted, timeout, &cancel).await
    });

    let plan = match outcome {
        Ok(plan) => plan,
        Err(PlannerError::GenerationCancelled) => {
            println!("Meal plan generation cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let store = MealPlanStore::new(plan);
    let mut tracker = AcceptanceTracker::new();

    if review_suggestions(&store, &mut tracker, DayFilter::All, MealTypeFilter::All)? {
        review_groceries(GroceryQuantityLedger::new(groceries))?;
    }
    Ok(())
}

/// Interactive suggestions page.
///
/// Returns true when the user moves on to the grocery list.
fn review_suggestions(
    store: &MealPlanStore,
    tracker: &mut AcceptanceTracker,
    mut day: DayFilter,
    mut meal_type: MealTypeFilter,
) -> Result<bool> {
    display_weekly_totals(&store.totals());

    loop {
        let shown = store.filtered(day, meal_type);
        display_suggestions(&shown, tracker, day, meal_type);

        match prompt_review_action()? {
            ReviewAction::Accept => {
                if let Some(id) = prompt_recipe(&shown, "Accept which recipe?")? {
                    tracker.accept(&id);
                }
            }
            ReviewAction::Reject => {
                if let Some(id) = prompt_recipe(&shown, "Replace which recipe?")? {
                    let request = store.reject(&id)?;
                    display_replacement_requests(&[request]);
                }
            }
            ReviewAction::View => {
                if let Some(id) = prompt_recipe(&shown, "View which recipe?")? {
                    let recipe = store.view(&id)?;
                    display_recipe(recipe, tracker.is_accepted(&id));
                }
            }
            ReviewAction::AcceptAll => tracker.accept_all(store.plan()),
            ReviewAction::Reset => tracker.reset(),
            ReviewAction::ChangeFilters => {
                (day, meal_type) = prompt_filters(day, meal_type)?;
            }
            ReviewAction::Continue => return Ok(true),
            ReviewAction::Quit => return Ok(false),
        }
    }
}

/// Interactive grocery page, ending with the order sheet.
fn review_groceries(mut ledger: GroceryQuantityLedger) -> Result<()> {
    let mut preferences = ShoppingPreferences::default();

    loop {
        display_grocery_list(&ledger, &preferences);

        match prompt_grocery_action()? {
            GroceryAction::Increase => {
                if let Some(id) = prompt_grocery_item(ledger.items())? {
                    ledger.adjust_quantity(&id, 1);
                }
            }
            GroceryAction::Decrease => {
                if let Some(id) = prompt_grocery_item(ledger.items())? {
                    ledger.adjust_quantity(&id, -1);
                }
            }
            GroceryAction::ShoppingPreferences => {
                preferences.organic_only = prompt_yes_no(
                    "Prefer organic products when available?",
                    preferences.organic_only,
                )?;
                preferences.preferred_brands = prompt_text(
                    "Preferred brands (comma separated, optional)",
                    &preferences.preferred_brands,
                )?;
                preferences.substitute_allowed = prompt_yes_no(
                    "Allow substitutions with similar items?",
                    preferences.substitute_allowed,
                )?;
            }
            GroceryAction::Order => {
                let path = PathBuf::from(prompt_text("Order sheet file", DEFAULT_ORDER_FILE)?);
                let rows = export_order_sheet(&path, &ledger, &preferences)?;
                println!("Order sheet with {} items written to {}", rows, path.display());
                return Ok(());
            }
            GroceryAction::Quit => return Ok(()),
        }
    }
}
