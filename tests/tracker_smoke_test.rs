use chrono::NaiveDate;
use tempfile::tempdir;

use macro_vision_rs::models::{ActivityLevel, BodyProfile, Goal, MealRecord};
use macro_vision_rs::state::{import_meals_csv, load_state, save_state, TrackerState};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn sample_state() -> TrackerState {
    let mut state = TrackerState::new();
    state
        .set_profile(BodyProfile::new(30, 180.0, 80.0, ActivityLevel::Medium, Goal::Maintain).unwrap())
        .unwrap();
    state
        .add_meal(date(15), MealRecord::named("Oats", 300.0, 10.0, 54.0, 5.0))
        .unwrap();
    state
        .add_meal(date(16), MealRecord::named("Eggs", 250.0, 18.0, 2.0, 18.0))
        .unwrap();
    state
        .add_meal(date(16), MealRecord::new(400.0, 14.0, 75.0, 4.0))
        .unwrap();
    state
}

#[test]
fn test_state_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("macro_state.json");

    let state = sample_state();
    save_state(&path, &state).unwrap();

    let reloaded = load_state(&path).unwrap();
    assert_eq!(reloaded, state);
    assert_eq!(reloaded.meals_on(date(16)).count(), 2);
}

#[test]
fn test_summary_after_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("macro_state.json");
    save_state(&path, &sample_state()).unwrap();

    let state = load_state(&path).unwrap();
    let summary = state.daily_summary(date(16)).unwrap();

    assert_eq!(summary.totals.calories, 650.0);
    assert_eq!(summary.totals.fat, 22.0);
    assert_eq!(summary.target.protein_grams, 128);
    // 32 / 128 = 25%
    assert_eq!(summary.progress.protein, 25);
}

#[test]
fn test_import_then_reset_day() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("meals.csv");
    std::fs::write(
        &csv_path,
        "name,calories,protein,carbs,fat\nRice,200,4,44,0.5\nChicken,165,31,0,3.5\n",
    )
    .unwrap();

    let mut state = sample_state();
    for logged in import_meals_csv(&csv_path, date(17)).unwrap() {
        state.add_meal(logged.logged_on, logged.meal).unwrap();
    }

    let summary = state.daily_summary(date(17)).unwrap();
    assert_eq!(summary.totals.calories, 365.0);
    assert_eq!(summary.totals.protein, 35.0);

    assert_eq!(state.reset_day(date(17)), 2);
    assert_eq!(state.meal_count(), 3);
    assert_eq!(state.daily_summary(date(17)).unwrap().totals.calories, 0.0);
}
