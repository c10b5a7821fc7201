use crate::models::{DailyNutritionSummary, DailyTarget, MealRecord};

/// Width of the progress bars in characters.
const BAR_WIDTH: usize = 20;

/// Render a percentage as a fixed-width bar, e.g. `[#####...............]`.
pub fn progress_bar(percent: i32, width: usize) -> String {
    let clamped = percent.clamp(0, 100) as usize;
    let filled = clamped * width / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Display the daily target.
pub fn display_target(target: &DailyTarget) {
    println!();
    println!("=== Daily Target ===");
    println!();
    println!("  Calories: {:>5} kcal", target.calories);
    println!("  Protein:  {:>5} g", target.protein_grams);
    println!("  Carbs:    {:>5} g", target.carbs_grams);
    println!("  Fat:      {:>5} g", target.fat_grams);
    println!("  Fiber:    {:>5} g", target.fiber_grams);
    println!();
}

/// Display totals and progress bars for a day.
pub fn display_summary(summary: &DailyNutritionSummary) {
    let t = &summary.totals;
    let target = &summary.target;
    let p = &summary.progress;

    let rows = [
        ("Calories", t.calories, target.calories, "kcal", p.calories),
        ("Protein", t.protein, target.protein_grams, "g", p.protein),
        ("Carbs", t.carbs, target.carbs_grams, "g", p.carbs),
        ("Fat", t.fat, target.fat_grams, "g", p.fat),
    ];

    println!();
    println!("=== Summary for {} ===", summary.date);
    println!();

    for (label, total, goal, unit, pct) in rows {
        println!(
            "  {:<8} {} {:>3}%  {:>5.0} / {} {}",
            label,
            progress_bar(pct, BAR_WIDTH),
            pct,
            total,
            goal,
            unit
        );
    }

    println!();
}

/// Display the meals contributing to a day.
pub fn display_meal_list(meals: &[&MealRecord]) {
    if meals.is_empty() {
        println!("No meals logged.");
        return;
    }

    let max_name_len = meals
        .iter()
        .map(|m| m.display_name().len())
        .max()
        .unwrap_or(10);

    for (i, meal) in meals.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4.0} kcal | P {:.1} g  C {:.1} g  F {:.1} g",
            i + 1,
            meal.display_name(),
            meal.calories,
            meal.protein,
            meal.carbs,
            meal.fat,
            width = max_name_len
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[..........]");
        assert_eq!(progress_bar(50, 10), "[#####.....]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(-20, 4), "[....]");
    }
}
