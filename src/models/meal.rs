use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Absent, `null` and empty values all read as zero.
fn zero_if_missing<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Caloric and macro contribution of one eaten item or meal.
///
/// Numeric fields that are missing, `null` or empty deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_grams: Option<f64>,

    #[serde(default, deserialize_with = "zero_if_missing")]
    pub calories: f64,

    /// Protein in grams.
    #[serde(default, deserialize_with = "zero_if_missing")]
    pub protein: f64,

    /// Carbohydrates in grams.
    #[serde(default, deserialize_with = "zero_if_missing")]
    pub carbs: f64,

    /// Fat in grams.
    #[serde(default, deserialize_with = "zero_if_missing")]
    pub fat: f64,
}

impl MealRecord {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: None,
            estimated_grams: None,
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn named(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(calories, protein, carbs, fat)
        }
    }

    /// All macro fields finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
            && self
                .estimated_grams
                .is_none_or(|g| g.is_finite() && g >= 0.0)
    }

    /// Label for display.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

/// A meal stamped with the calendar day it was logged on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub logged_on: NaiveDate,

    #[serde(flatten)]
    pub meal: MealRecord,
}

impl LoggedMeal {
    pub fn new(logged_on: NaiveDate, meal: MealRecord) -> Self {
        Self { logged_on, meal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let meal: MealRecord = serde_json::from_str(r#"{"name": "Apple", "calories": 95}"#).unwrap();
        assert_eq!(meal.calories, 95.0);
        assert_eq!(meal.protein, 0.0);
        assert_eq!(meal.carbs, 0.0);
        assert_eq!(meal.fat, 0.0);
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let meal: MealRecord =
            serde_json::from_str(r#"{"calories": 100, "protein": null, "fat": null}"#).unwrap();
        assert_eq!(meal.calories, 100.0);
        assert_eq!(meal.protein, 0.0);
        assert_eq!(meal.carbs, 0.0);
        assert_eq!(meal.fat, 0.0);
    }

    #[test]
    fn test_logged_meal_null_fields_default_to_zero() {
        let logged: LoggedMeal =
            serde_json::from_str(r#"{"logged_on": "2026-10-16", "calories": 80, "carbs": null}"#)
                .unwrap();
        assert_eq!(logged.meal.calories, 80.0);
        assert_eq!(logged.meal.carbs, 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(MealRecord::new(250.0, 10.0, 30.0, 8.0).is_valid());
        assert!(!MealRecord::new(-1.0, 10.0, 30.0, 8.0).is_valid());
        assert!(!MealRecord::new(250.0, f64::NAN, 30.0, 8.0).is_valid());

        let mut meal = MealRecord::named("Rice", 200.0, 4.0, 44.0, 0.5);
        meal.estimated_grams = Some(-5.0);
        assert!(!meal.is_valid());
    }

    #[test]
    fn test_logged_meal_is_flat() {
        let logged = LoggedMeal::new(
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            MealRecord::named("Toast", 120.0, 4.0, 20.0, 2.0),
        );
        let value = serde_json::to_value(&logged).unwrap();
        assert_eq!(value["logged_on"], "2026-10-16");
        assert_eq!(value["name"], "Toast");
        assert_eq!(value["calories"], 120.0);
    }
}
