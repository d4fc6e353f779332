use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, SubmittedPreferences};

/// Turns submitted preferences into a week of suggestions.
///
/// Implementations answer once per call. A failure is reported as
/// `PlannerError::GenerationFailed`.
#[async_trait]
pub trait MealPlanGenerator: Send + Sync {
    async fn generate(&self, preferences: &SubmittedPreferences) -> Result<MealPlan>;
}

/// Stand-in generator: waits, then hands back a fixed plan.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    plan: MealPlan,
    delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(plan: MealPlan, delay: Duration) -> Self {
        Self { plan, delay }
    }
}

#[async_trait]
impl MealPlanGenerator for SimulatedGenerator {
    async fn generate(&self, preferences: &SubmittedPreferences) -> Result<MealPlan> {
        tracing::debug!(
            goal = preferences.goal(),
            servings = preferences.servings(),
            calorie_target = preferences.calorie_target(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating meal plan generation"
        );
        tokio::time::sleep(self.delay).await;
        Ok(self.plan.clone())
    }
}

/// Ask `generator` for a plan, giving up on timeout or cancellation.
///
/// Cancellation wins over a completion that lands at the same moment, so a
/// cancelled request never yields a plan.
pub async fn request_plan(
    generator: &dyn MealPlanGenerator,
    preferences: &SubmittedPreferences,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<MealPlan> {
    tracing::info!(timeout_ms = timeout.as_millis() as u64, "requesting meal plan");

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::info!("meal plan request cancelled");
            Err(PlannerError::GenerationCancelled)
        }
        outcome = tokio::time::timeout(timeout, generator.generate(preferences)) => match outcome {
            Ok(Ok(plan)) => {
                tracing::info!(
                    days = plan.day_count(),
                    meals = plan.meal_count(),
                    "meal plan generated"
                );
                Ok(plan)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "meal plan generation failed");
                Err(e)
            }
            Err(_) => {
                tracing::warn!(timeout_ms = timeout.as_millis() as u64, "meal plan generation timed out");
                Err(PlannerError::GenerationTimedOut(timeout.as_millis() as u64))
            }
        }
    }
}
