use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{MacroError, Result};
use crate::models::{LoggedMeal, MealRecord};
use crate::state::TrackerState;

/// Load tracker state from a JSON file, rejecting invalid profiles and meals.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<TrackerState> {
    let content = fs::read_to_string(path)?;
    let state: TrackerState = serde_json::from_str(&content)?;
    state.validate()?;
    Ok(state)
}

/// Load tracker state, starting empty when the file does not exist yet.
pub fn load_state_or_default<P: AsRef<Path>>(path: P) -> Result<TrackerState> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("State file {:?} not found; starting empty", path);
        return Ok(TrackerState::default());
    }
    load_state(path)
}

/// Save tracker state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &TrackerState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read meals from a CSV file and stamp them with `logged_on`.
///
/// Expected headers: `name,calories,protein,carbs,fat` with an optional
/// `estimated_grams` column.
pub fn import_meals_csv<P: AsRef<Path>>(path: P, logged_on: NaiveDate) -> Result<Vec<LoggedMeal>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut meals = Vec::new();
    for (i, row) in rdr.deserialize::<MealRecord>().enumerate() {
        let meal = row?;
        if !meal.is_valid() {
            // Header is line 1
            return Err(MacroError::InvalidInput(format!(
                "row {} ({}) has negative or non-finite values",
                i + 2,
                meal.display_name()
            )));
        }
        meals.push(LoggedMeal::new(logged_on, meal));
    }

    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_state_or_default(dir.path().join("missing.json")).unwrap();
        assert_eq!(state, TrackerState::default());
    }

    #[test]
    fn test_load_rejects_unknown_activity() {
        let json = r#"{
            "profile": {"age": 30, "height_cm": 180, "weight_kg": 80, "activity_level": "extreme", "goal": "maintain"},
            "meals": []
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_state(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid activity level value 'extreme'"));
    }

    #[test]
    fn test_load_rejects_invalid_profile() {
        let json = r#"{
            "profile": {"age": 0, "height_cm": -180, "weight_kg": 80, "activity_level": "low", "goal": "maintain"},
            "meals": []
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_state(file.path()), Err(MacroError::InvalidInput(_))));
    }

    #[test]
    fn test_load_rejects_negative_meal() {
        let json = r#"{
            "profile": {"age": 30, "height_cm": 180, "weight_kg": 80, "activity_level": "low", "goal": "maintain"},
            "meals": [{"logged_on": "2026-10-16", "name": "Ghost", "calories": -500}]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_state(file.path()).unwrap_err();
        assert!(err.to_string().contains("Ghost logged on 2026-10-16"));
    }

    #[test]
    fn test_import_csv_empty_cells_are_zero() {
        let csv = "name,calories,protein,carbs,fat\nApple,95,,25,\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let meals = import_meals_csv(file.path(), date()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal.calories, 95.0);
        assert_eq!(meals[0].meal.protein, 0.0);
        assert_eq!(meals[0].meal.carbs, 25.0);
        assert_eq!(meals[0].meal.fat, 0.0);
    }

    #[test]
    fn test_import_csv() {
        let csv = "name,calories,protein,carbs,fat,estimated_grams\n\
                   Rice, 200, 4, 44, 0.5, 150\n\
                   Chicken,165,31,0,3.6,100\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let meals = import_meals_csv(file.path(), date()).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].meal.name.as_deref(), Some("Rice"));
        assert_eq!(meals[0].meal.estimated_grams, Some(150.0));
        assert_eq!(meals[1].meal.protein, 31.0);
        assert!(meals.iter().all(|m| m.logged_on == date()));
    }

    #[test]
    fn test_import_csv_without_grams_column() {
        let csv = "name,calories,protein,carbs,fat\nApple,95,0.5,25,0.3\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let meals = import_meals_csv(file.path(), date()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal.estimated_grams, None);
    }

    #[test]
    fn test_import_csv_rejects_negative_row() {
        let csv = "name,calories,protein,carbs,fat\nApple,95,0.5,25,0.3\nBad,-5,0,0,0\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = import_meals_csv(file.path(), date()).unwrap_err();
        assert!(err.to_string().contains("row 3 (Bad)"));
    }
}
