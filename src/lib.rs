pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use calculator::{aggregate, compute_daily_summary, compute_daily_target};
pub use error::{MacroError, Result};
pub use models::{
    ActivityLevel, BodyProfile, DailyNutritionSummary, DailyTarget, Goal, MacroTotals, MealRecord,
};
