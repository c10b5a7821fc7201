use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily calorie and macro goals, rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTarget {
    pub calories: u32,
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fat_grams: u32,
    pub fiber_grams: u32,
}

/// Summed contributions of a set of meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Percentage of each target reached, capped at 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl Progress {
    pub fn as_array(&self) -> [i32; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }
}

/// Totals for one day measured against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionSummary {
    pub date: NaiveDate,
    pub totals: MacroTotals,
    pub target: DailyTarget,
    pub progress: Progress,
}
