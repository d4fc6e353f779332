pub mod prompts;
pub mod render;

pub use prompts::{
    fill_preferences_form, prompt_delivery_day, prompt_filters, prompt_form_action, prompt_goal,
    prompt_grocery_action, prompt_grocery_item, prompt_multi_value, prompt_number, prompt_recipe,
    prompt_review_action, prompt_text, prompt_yes_no, FormAction, GroceryAction, ReviewAction,
};
pub use render::{
    display_grocery_list, display_preferences, display_recipe, display_replacement_requests,
    display_suggestions, display_weekly_totals,
};
