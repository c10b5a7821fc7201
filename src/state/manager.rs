use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::error::{MacroError, Result};
use crate::models::{BodyProfile, DailyNutritionSummary, DailyTarget, LoggedMeal, MealRecord};

fn check_meal(meal: &MealRecord) -> Result<()> {
    if !meal.is_valid() {
        return Err(MacroError::InvalidInput(format!(
            "{} has negative or non-finite values",
            meal.display_name()
        )));
    }
    Ok(())
}

/// The user's profile and meal log, passed explicitly into the calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    profile: Option<BodyProfile>,

    #[serde(default)]
    meals: Vec<LoggedMeal>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the profile after validating it.
    pub fn set_profile(&mut self, profile: BodyProfile) -> Result<()> {
        profile.validate()?;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn profile(&self) -> Option<&BodyProfile> {
        self.profile.as_ref()
    }

    /// Log one meal on a given day.
    pub fn add_meal(&mut self, logged_on: NaiveDate, meal: MealRecord) -> Result<()> {
        check_meal(&meal)?;
        self.meals.push(LoggedMeal::new(logged_on, meal));
        Ok(())
    }

    /// Replace the whole meal log. Nothing changes if any meal is invalid.
    pub fn set_meals(&mut self, meals: Vec<LoggedMeal>) -> Result<()> {
        for logged in &meals {
            check_meal(&logged.meal)?;
        }
        self.meals = meals;
        Ok(())
    }

    /// Check the profile and every logged meal, e.g. after loading from disk.
    pub fn validate(&self) -> Result<()> {
        if let Some(profile) = &self.profile {
            profile.validate()?;
        }
        for logged in &self.meals {
            check_meal(&logged.meal).map_err(|_| {
                MacroError::InvalidInput(format!(
                    "{} logged on {} has negative or non-finite values",
                    logged.meal.display_name(),
                    logged.logged_on
                ))
            })?;
        }
        Ok(())
    }

    /// Meals logged on `date`, in insertion order.
    pub fn meals_on(&self, date: NaiveDate) -> impl Iterator<Item = &MealRecord> {
        self.meals
            .iter()
            .filter(move |m| m.logged_on == date)
            .map(|m| &m.meal)
    }

    pub fn all_meals(&self) -> &[LoggedMeal] {
        &self.meals
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    /// Remove the meals logged on `date`. Returns how many were removed.
    pub fn reset_day(&mut self, date: NaiveDate) -> usize {
        let before = self.meals.len();
        self.meals.retain(|m| m.logged_on != date);
        before - self.meals.len()
    }

    /// Drop every logged meal, keeping the profile.
    pub fn reset_all(&mut self) {
        self.meals.clear();
    }

    /// Daily target for the stored profile.
    pub fn daily_target(&self) -> Result<DailyTarget> {
        let profile = self.profile.as_ref().ok_or(MacroError::MissingProfile)?;
        Ok(calculator::compute_daily_target(profile))
    }

    /// Summary of the meals logged on `date` against the profile's target.
    pub fn daily_summary(&self, date: NaiveDate) -> Result<DailyNutritionSummary> {
        let target = self.daily_target()?;
        calculator::compute_daily_summary(self.meals_on(date), &target, date)
    }
}
