use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{ActivityLevel, BodyProfile, Goal, MealRecord};

fn prompt_positive(prompt: &str, default: f64) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|v: &f64| -> std::result::Result<(), &str> {
            if v.is_finite() && *v > 0.0 {
                Ok(())
            } else {
                Err("Must be a positive number")
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_non_negative(prompt: &str) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(0.0)
        .validate_with(|v: &f64| -> std::result::Result<(), &str> {
            if v.is_finite() && *v >= 0.0 {
                Ok(())
            } else {
                Err("Must be zero or more")
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompt for a full body profile, defaulting to the current one.
pub fn prompt_profile(current: Option<&BodyProfile>) -> Result<BodyProfile> {
    let age = Input::<u32>::new()
        .with_prompt("Age (years)")
        .default(current.map(|p| p.age).unwrap_or(30))
        .validate_with(|v: &u32| -> std::result::Result<(), &str> {
            if *v > 0 { Ok(()) } else { Err("Age must be > 0") }
        })
        .interact_text()?;

    let height_cm = prompt_positive("Height (cm)", current.map(|p| p.height_cm).unwrap_or(175.0))?;
    let weight_kg = prompt_positive("Weight (kg)", current.map(|p| p.weight_kg).unwrap_or(75.0))?;

    let activity_names: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.as_str()).collect();
    let activity_default = current
        .and_then(|p| ActivityLevel::ALL.iter().position(|a| *a == p.activity_level))
        .unwrap_or(1);
    let activity = Select::new()
        .with_prompt("Activity level")
        .items(&activity_names)
        .default(activity_default)
        .interact()?;

    let goal_names: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();
    let goal_default = current
        .and_then(|p| Goal::ALL.iter().position(|g| *g == p.goal))
        .unwrap_or(1);
    let goal = Select::new()
        .with_prompt("Goal")
        .items(&goal_names)
        .default(goal_default)
        .interact()?;

    BodyProfile::new(
        age,
        height_cm,
        weight_kg,
        ActivityLevel::ALL[activity],
        Goal::ALL[goal],
    )
}

/// Prompt for a meal's name and nutrition values.
pub fn prompt_meal(name: Option<String>) -> Result<MealRecord> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Meal name")
            .allow_empty(true)
            .interact_text()?,
    };

    let calories = prompt_non_negative("Calories (kcal)")?;
    let protein = prompt_non_negative("Protein (g)")?;
    let carbs = prompt_non_negative("Carbs (g)")?;
    let fat = prompt_non_negative("Fat (g)")?;

    let name = name.trim();
    Ok(if name.is_empty() {
        MealRecord::new(calories, protein, carbs, fat)
    } else {
        MealRecord::named(name, calories, protein, carbs, fat)
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
