use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor (gender-neutral offset)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
pub const BMR_AGE_FACTOR: f64 = 5.0;
pub const BMR_OFFSET: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments and macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit applied when losing weight (kcal).
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;

/// Daily surplus applied when gaining weight (kcal).
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Protein grams per kg of body weight.
pub const PROTEIN_GRAMS_PER_KG: f64 = 1.6;

/// Share of adjusted calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.3;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fixed daily fiber goal, independent of the profile.
pub const FIBER_TARGET_GRAMS: u32 = 30;

/// Upper bound for any progress percentage.
pub const PROGRESS_CAP: i32 = 100;

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Low => 1.375,
        ActivityLevel::Medium => 1.55,
        ActivityLevel::High => 1.725,
    }
}

/// Calorie offset applied to TDEE for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -LOSE_DEFICIT_KCAL,
        Goal::Maintain => 0.0,
        Goal::Gain => GAIN_SURPLUS_KCAL,
    }
}
