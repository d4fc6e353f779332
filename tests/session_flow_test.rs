use std::time::Duration;

use assert_float_eq::assert_float_absolute_eq;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use weekly_meal_planner_rs::cli::parse_adjustment;
use weekly_meal_planner_rs::models::{
    GroceryItem, MealPlan, PreferencesDraft, SubmittedPreferences, Weekday,
};
use weekly_meal_planner_rs::planner::{
    request_plan, sample_grocery_list, sample_meal_plan, MealPlanGenerator, SimulatedGenerator,
};
use weekly_meal_planner_rs::state::{
    AcceptanceTracker, DraftUpdate, GroceryQuantityLedger, MealPlanStore, MultiValueField,
};
use weekly_meal_planner_rs::PlannerError;

struct FailingGenerator;

#[async_trait]
impl MealPlanGenerator for FailingGenerator {
    async fn generate(&self, _preferences: &SubmittedPreferences) -> Result<MealPlan, PlannerError> {
        Err(PlannerError::GenerationFailed("no recipes available".to_string()))
    }
}

fn submitted() -> SubmittedPreferences {
    let mut draft = PreferencesDraft::new();
    draft.set_field(DraftUpdate::Goal("Eat Healthier".to_string()));
    draft
        .toggle_multi_value(MultiValueField::CuisinePreferences, "Italian")
        .unwrap();
    draft.submit()
}

#[tokio::test]
async fn test_simulated_generator_returns_plan() {
    let generator = SimulatedGenerator::new(sample_meal_plan(), Duration::from_millis(10));
    let cancel = CancellationToken::new();

    let plan = request_plan(&generator, &submitted(), Duration::from_secs(5), &cancel)
        .await
        .unwrap();

    assert_eq!(plan, sample_meal_plan());
}

#[tokio::test]
async fn test_generation_failure_is_reported() {
    let cancel = CancellationToken::new();
    let result = request_plan(&FailingGenerator, &submitted(), Duration::from_secs(5), &cancel).await;

    assert!(matches!(result, Err(PlannerError::GenerationFailed(_))));
}

#[tokio::test]
async fn test_generation_times_out() {
    let generator = SimulatedGenerator::new(sample_meal_plan(), Duration::from_secs(10));
    let cancel = CancellationToken::new();

    let result = request_plan(&generator, &submitted(), Duration::from_millis(20), &cancel).await;

    assert!(matches!(result, Err(PlannerError::GenerationTimedOut(20))));
}

#[tokio::test]
async fn test_cancelled_generation_yields_no_plan() {
    let generator = SimulatedGenerator::new(sample_meal_plan(), Duration::from_secs(10));
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = request_plan(&generator, &submitted(), Duration::from_secs(30), &cancel).await;
    assert!(matches!(result, Err(PlannerError::GenerationCancelled)));
}

#[tokio::test]
async fn test_already_cancelled_request_never_completes() {
    let generator = SimulatedGenerator::new(sample_meal_plan(), Duration::ZERO);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = request_plan(&generator, &submitted(), Duration::from_secs(5), &cancel).await;
    assert!(matches!(result, Err(PlannerError::GenerationCancelled)));
}

#[test]
fn test_accept_all_covers_exactly_the_plan() {
    let store = MealPlanStore::new(sample_meal_plan());
    let mut tracker = AcceptanceTracker::new();
    tracker.accept_all(store.plan());

    for id in store.plan().recipe_ids() {
        assert!(tracker.is_accepted(id), "{} should be accepted", id);
    }
    assert!(!tracker.is_accepted("r-not-in-plan"));

    tracker.reset();
    for id in store.plan().recipe_ids() {
        assert!(!tracker.is_accepted(id));
    }
}

#[test]
fn test_weekly_totals_derived_from_plan() {
    let store = MealPlanStore::new(sample_meal_plan());
    let totals = store.totals();

    let calories: f64 = store
        .plan()
        .all_meals()
        .map(|(_, meal)| meal.recipe.nutrition.calories)
        .sum();
    let protein: f64 = store
        .plan()
        .all_meals()
        .map(|(_, meal)| meal.recipe.nutrition.protein)
        .sum();

    assert_float_absolute_eq!(totals.total().calories, calories, 1e-6);
    assert_float_absolute_eq!(totals.total().protein, protein, 1e-6);
    assert_float_absolute_eq!(totals.daily_average().calories, calories / 7.0, 1e-6);

    let per_day_sum: f64 = totals.per_day().iter().map(|(_, n)| n.calories).sum();
    assert_float_absolute_eq!(per_day_sum, calories, 1e-6);
}

#[test]
fn test_filtered_totals_follow_filtered_plan() {
    let store = MealPlanStore::new(sample_meal_plan());
    let monday = store.filtered(
        "Monday".parse().unwrap(),
        "All".parse().unwrap(),
    );

    let totals = monday.totals();
    assert_eq!(totals.per_day().len(), 1);
    assert_eq!(totals.per_day()[0].0, Weekday::Monday);
    assert_float_absolute_eq!(totals.total().calories, 350.0 + 520.0 + 610.0, 1e-6);
}

#[test]
fn test_grocery_quantities_floor_at_zero() {
    let mut ledger = GroceryQuantityLedger::new(vec![GroceryItem::new(
        "1", "Eggs", "Dairy", 3, "dozen", &[],
    )]);

    assert_eq!(ledger.adjust_quantity("1", -1000), Some(0));
    assert_eq!(ledger.get("1").unwrap().quantity, 0);
}

#[test]
fn test_command_line_adjustments_saturate() {
    let mut ledger = GroceryQuantityLedger::new(vec![GroceryItem::new(
        "1", "Eggs", "Dairy", 1, "dozen", &[],
    )]);

    let (id, delta) = parse_adjustment("1=9223372036854775807").unwrap();
    assert_eq!(ledger.adjust_quantity(&id, delta), Some(u32::MAX));

    let (id, delta) = parse_adjustment("1=-9223372036854775808").unwrap();
    assert_eq!(ledger.adjust_quantity(&id, delta), Some(0));
}

#[test]
fn test_unknown_grocery_item_leaves_ledger_unchanged() {
    let mut ledger = GroceryQuantityLedger::new(sample_grocery_list());
    let before = ledger.items().to_vec();

    assert_eq!(ledger.adjust_quantity("no-such-item", 1), None);
    assert_eq!(ledger.items(), before.as_slice());
}

#[test]
fn test_draft_reset_restores_adults() {
    let mut draft = PreferencesDraft::new();
    assert_eq!(draft.adults(), 2);
    assert_eq!(draft.kids(), 0);

    draft.set_field_str("adults", "4").unwrap();
    assert_eq!(draft.adults(), 4);

    draft.reset();
    assert_eq!(draft.adults(), 2);
}

#[test]
fn test_toggling_vegan_twice_restores_set() {
    let mut draft = PreferencesDraft::new();
    let original = draft.dietary_restrictions().clone();

    draft
        .toggle_multi_value(MultiValueField::DietaryRestrictions, "Vegan")
        .unwrap();
    assert!(draft.dietary_restrictions().contains("Vegan"));

    draft
        .toggle_multi_value(MultiValueField::DietaryRestrictions, "Vegan")
        .unwrap();
    assert_eq!(draft.dietary_restrictions(), &original);
}
