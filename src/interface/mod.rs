pub mod prompts;
pub mod render;

pub use prompts::{prompt_meal, prompt_profile, prompt_yes_no};
pub use render::{display_meal_list, display_summary, display_target, progress_bar};
