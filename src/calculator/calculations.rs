use chrono::NaiveDate;

use crate::calculator::constants::*;
use crate::error::{MacroError, Result};
use crate::models::{BodyProfile, DailyNutritionSummary, DailyTarget, Goal, MacroTotals, MealRecord, Progress};

/// Round to the nearest integer, halves going up.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(profile: &BodyProfile) -> f64 {
    BMR_WEIGHT_FACTOR * profile.weight_kg + BMR_HEIGHT_FACTOR * profile.height_cm
        - BMR_AGE_FACTOR * profile.age as f64
        + BMR_OFFSET
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn total_daily_energy_expenditure(profile: &BodyProfile) -> f64 {
    basal_metabolic_rate(profile) * activity_multiplier(profile.activity_level)
}

/// Apply the goal's deficit or surplus to a TDEE value.
pub fn adjusted_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal_adjustment(goal)
}

/// Round a raw target value into whole units, flooring negatives at zero.
fn to_target_units(metric: &'static str, raw: f64) -> u32 {
    if raw.is_nan() || raw < 0.0 {
        tracing::warn!(
            "Raw {} target {:.2} is negative; flooring at 0",
            metric,
            raw
        );
        return 0;
    }
    round_half_up(raw) as u32
}

/// Compute the daily calorie and macro target for a profile.
///
/// Protein is fixed per kg of body weight, fat takes a fixed share of the
/// adjusted calories, and carbs take whatever is left.
pub fn compute_daily_target(profile: &BodyProfile) -> DailyTarget {
    let tdee = total_daily_energy_expenditure(profile);
    let calories = adjusted_calories(tdee, profile.goal);

    let protein_grams = profile.weight_kg * PROTEIN_GRAMS_PER_KG;
    let protein_calories = protein_grams * KCAL_PER_GRAM_PROTEIN;

    let fat_calories = calories * FAT_CALORIE_SHARE;
    let fat_grams = fat_calories / KCAL_PER_GRAM_FAT;

    // Remainder may go negative for small, heavy-protein profiles
    let carb_calories = calories - protein_calories - fat_calories;
    let carbs_grams = carb_calories / KCAL_PER_GRAM_CARBS;

    tracing::debug!(
        tdee,
        calories,
        protein_grams,
        carbs_grams,
        fat_grams,
        "computed raw daily target"
    );

    DailyTarget {
        calories: to_target_units("calories", calories),
        protein_grams: to_target_units("protein", protein_grams),
        carbs_grams: to_target_units("carbs", carbs_grams),
        fat_grams: to_target_units("fat", fat_grams),
        fiber_grams: FIBER_TARGET_GRAMS,
    }
}

/// Non-finite contributions count as zero.
#[inline]
fn contribution(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Sum values in ascending order so the result does not depend on input order.
fn sorted_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Sum calories and macros across meals.
///
/// Each field is summed in sorted order, so any permutation of `meals`
/// yields bit-identical totals.
pub fn aggregate<'a, I>(meals: I) -> MacroTotals
where
    I: IntoIterator<Item = &'a MealRecord>,
{
    let mut calories = Vec::new();
    let mut protein = Vec::new();
    let mut carbs = Vec::new();
    let mut fat = Vec::new();

    for meal in meals {
        calories.push(contribution(meal.calories));
        protein.push(contribution(meal.protein));
        carbs.push(contribution(meal.carbs));
        fat.push(contribution(meal.fat));
    }

    MacroTotals {
        calories: sorted_sum(calories),
        protein: sorted_sum(protein),
        carbs: sorted_sum(carbs),
        fat: sorted_sum(fat),
    }
}

/// Percentage of `target` reached by `total`, capped at 100.
///
/// A zero target counts as fully reached when nothing was eaten, and is a
/// [`MacroError::DegenerateTarget`] otherwise.
pub fn progress_ratio(metric: &'static str, total: f64, target: u32) -> Result<i32> {
    if target == 0 {
        if total > 0.0 {
            return Err(MacroError::DegenerateTarget { metric, total });
        }
        return Ok(PROGRESS_CAP);
    }

    let pct = round_half_up(total / target as f64 * 100.0).min(PROGRESS_CAP as f64);
    Ok(pct as i32)
}

/// Measure a day's meals against a target.
///
/// `date` is supplied by the caller; nothing here reads the clock.
pub fn compute_daily_summary<'a, I>(
    meals: I,
    target: &DailyTarget,
    date: NaiveDate,
) -> Result<DailyNutritionSummary>
where
    I: IntoIterator<Item = &'a MealRecord>,
{
    let totals = aggregate(meals);

    let progress = Progress {
        calories: progress_ratio("calories", totals.calories, target.calories)?,
        protein: progress_ratio("protein", totals.protein, target.protein_grams)?,
        carbs: progress_ratio("carbs", totals.carbs, target.carbs_grams)?,
        fat: progress_ratio("fat", totals.fat, target.fat_grams)?,
    };

    Ok(DailyNutritionSummary {
        date,
        totals,
        target: *target,
        progress,
    })
}
