pub mod meal;
pub mod profile;
pub mod summary;

pub use meal::{LoggedMeal, MealRecord};
pub use profile::{ActivityLevel, BodyProfile, Goal};
pub use summary::{DailyNutritionSummary, DailyTarget, MacroTotals, Progress};
