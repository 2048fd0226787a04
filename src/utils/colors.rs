/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color against the daily goal:
/// at or above goal → green, above half → yellow, otherwise red.
pub fn color_for_progress(total_ml: i64, goal_ml: i64) -> &'static str {
    if goal_ml <= 0 {
        return RESET;
    }
    if total_ml >= goal_ml {
        GREEN
    } else if total_ml * 2 >= goal_ml {
        YELLOW
    } else {
        RED
    }
}
