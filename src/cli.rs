use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Goal};

/// MacroVision: track daily calories and macros against targets derived from your body profile.
#[derive(Parser, Debug)]
#[command(name = "macro_vision")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "macro_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the body profile (prompts for anything not given).
    Profile {
        /// Age in years.
        #[arg(long)]
        age: Option<u32>,

        /// Height in centimeters.
        #[arg(long)]
        height_cm: Option<f64>,

        /// Weight in kilograms.
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Activity level: low, medium or high.
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// Goal: lose, maintain or gain.
        #[arg(long)]
        goal: Option<Goal>,
    },

    /// Show the daily target for the stored profile.
    Target,

    /// Log a meal (prompts when calories are not given).
    AddMeal {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        calories: Option<f64>,

        /// Protein in grams.
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbohydrates in grams.
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fat in grams.
        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        /// Estimated portion weight in grams.
        #[arg(long)]
        grams: Option<f64>,

        /// Day to log on (YYYY-MM-DD, default today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log meals from a CSV file (name,calories,protein,carbs,fat[,estimated_grams]).
    Import {
        csv: PathBuf,

        /// Day to log on (YYYY-MM-DD, default today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show totals and progress for a day.
    Summary {
        /// Day to summarize (YYYY-MM-DD, default today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Also list the day's meals.
        #[arg(long)]
        meals: bool,
    },

    /// Clear logged meals.
    Reset {
        /// Clear every day, not just one.
        #[arg(long)]
        all: bool,

        /// Day to clear (YYYY-MM-DD, default today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary {
            date: None,
            meals: false,
        }
    }
}
