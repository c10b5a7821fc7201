use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_vision_rs::cli::{Cli, Command};
use macro_vision_rs::error::Result;
use macro_vision_rs::interface::{
    display_meal_list, display_summary, display_target, prompt_meal, prompt_profile, prompt_yes_no,
};
use macro_vision_rs::models::{ActivityLevel, BodyProfile, Goal, MealRecord};
use macro_vision_rs::state::{import_meals_csv, load_state_or_default, save_state};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("macro_vision_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Profile {
            age,
            height_cm,
            weight_kg,
            activity,
            goal,
        } => cmd_profile(path, age, height_cm, weight_kg, activity, goal),
        Command::Target => cmd_target(path),
        Command::AddMeal {
            name,
            calories,
            protein,
            carbs,
            fat,
            grams,
            date,
        } => {
            let meal = match calories {
                Some(calories) => {
                    let mut meal = MealRecord::new(calories, protein, carbs, fat);
                    meal.name = name;
                    meal
                }
                None => prompt_meal(name)?,
            };
            cmd_add_meal(path, meal, grams, date.unwrap_or_else(today))
        }
        Command::Import { csv, date } => cmd_import(path, &csv, date.unwrap_or_else(today)),
        Command::Summary { date, meals } => cmd_summary(path, date.unwrap_or_else(today), meals),
        Command::Reset { all, date } => cmd_reset(path, all, date.unwrap_or_else(today)),
    }
}

/// Calendar day in the local timezone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Set the body profile and show the resulting target.
fn cmd_profile(
    path: &Path,
    age: Option<u32>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    activity: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Result<()> {
    let mut state = load_state_or_default(path)?;

    let profile = match (age, height_cm, weight_kg, activity, goal) {
        (Some(age), Some(height_cm), Some(weight_kg), Some(activity), Some(goal)) => {
            BodyProfile::new(age, height_cm, weight_kg, activity, goal)?
        }
        _ => prompt_profile(state.profile())?,
    };

    state.set_profile(profile)?;
    save_state(path, &state)?;
    println!("Profile saved.");

    display_target(&state.daily_target()?);
    Ok(())
}

/// Show the daily target for the stored profile.
fn cmd_target(path: &Path) -> Result<()> {
    let state = load_state_or_default(path)?;
    display_target(&state.daily_target()?);
    Ok(())
}

/// Log a single meal.
fn cmd_add_meal(path: &Path, mut meal: MealRecord, grams: Option<f64>, date: NaiveDate) -> Result<()> {
    let mut state = load_state_or_default(path)?;

    if grams.is_some() {
        meal.estimated_grams = grams;
    }

    let label = meal.display_name().to_string();
    let calories = meal.calories;
    state.add_meal(date, meal)?;
    save_state(path, &state)?;

    println!("Logged {} ({:.0} kcal) on {}.", label, calories, date);
    Ok(())
}

/// Log every meal in a CSV file.
fn cmd_import(path: &Path, csv_path: &Path, date: NaiveDate) -> Result<()> {
    let mut state = load_state_or_default(path)?;
    let imported = import_meals_csv(csv_path, date)?;

    if imported.is_empty() {
        println!("No meals found in {}.", csv_path.display());
        return Ok(());
    }

    let count = imported.len();
    for logged in imported {
        state.add_meal(logged.logged_on, logged.meal)?;
    }
    save_state(path, &state)?;

    println!("Imported {} meals for {}.", count, date);
    Ok(())
}

/// Show totals and progress for a day.
fn cmd_summary(path: &Path, date: NaiveDate, show_meals: bool) -> Result<()> {
    let state = load_state_or_default(path)?;
    let summary = state.daily_summary(date)?;

    display_summary(&summary);

    if show_meals {
        let meals: Vec<&MealRecord> = state.meals_on(date).collect();
        display_meal_list(&meals);
        println!();
    }

    Ok(())
}

/// Clear one day's meals, or all meals after confirmation.
fn cmd_reset(path: &Path, all: bool, date: NaiveDate) -> Result<()> {
    let mut state = load_state_or_default(path)?;

    if all {
        if !prompt_yes_no("Delete every logged meal?", false)? {
            println!("Nothing deleted.");
            return Ok(());
        }
        let count = state.meal_count();
        state.reset_all();
        save_state(path, &state)?;
        println!("Deleted {} meals.", count);
        return Ok(());
    }

    let removed = state.reset_day(date);
    save_state(path, &state)?;
    println!("Deleted {} meals logged on {}.", removed, date);
    Ok(())
}
