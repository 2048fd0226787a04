//! Formatting utilities used for CLI and export outputs.

/// Render a milliliter amount for humans: "800 ml" up to one liter,
/// "1.50 L" beyond.
pub fn ml2readable(ml: i64) -> String {
    if ml.abs() < 1000 {
        format!("{} ml", ml)
    } else {
        format!("{:.2} L", ml as f64 / 1000.0)
    }
}

/// Progress string against the daily goal, e.g. "800 / 2000 ml (40%)".
pub fn goal_progress(total_ml: i64, goal_ml: i64) -> String {
    if goal_ml <= 0 {
        return format!("{} ml (no goal)", total_ml);
    }
    let pct = total_ml * 100 / goal_ml;
    format!("{} / {} ml ({}%)", total_ml, goal_ml, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ml2readable_small_and_large() {
        assert_eq!(ml2readable(0), "0 ml");
        assert_eq!(ml2readable(800), "800 ml");
        assert_eq!(ml2readable(1500), "1.50 L");
        assert_eq!(ml2readable(2000), "2.00 L");
    }

    #[test]
    fn goal_progress_percentage() {
        assert_eq!(goal_progress(800, 2000), "800 / 2000 ml (40%)");
        assert_eq!(goal_progress(2500, 2000), "2500 / 2000 ml (125%)");
        assert_eq!(goal_progress(300, 0), "300 ml (no goal)");
    }
}
