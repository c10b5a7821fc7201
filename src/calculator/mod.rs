pub mod calculations;
pub mod constants;

pub use calculations::{
    adjusted_calories, aggregate, basal_metabolic_rate, compute_daily_summary,
    compute_daily_target, progress_ratio, round_half_up, total_daily_energy_expenditure,
};
pub use constants::*;
