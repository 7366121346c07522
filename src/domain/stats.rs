//! Streak and completion-rate calculations over completion records.
//!
//! These walk calendar days backward from an explicit reference date.
//! Callers pass "today" in; only the application boundary reads the clock.

use chrono::{Duration, NaiveDate};

use crate::domain::{HabitCompletion, HabitId};

fn completed_on(completions: &[HabitCompletion], habit_id: &HabitId, date: NaiveDate) -> bool {
    completions
        .iter()
        .any(|c| c.habit_id == *habit_id && c.date == date && c.completed)
}

/// Number of consecutive completed days ending at `today`.
///
/// Today itself counts; if today is not completed the streak is 0
/// regardless of history. Terminates because the completion list is
/// finite.
pub fn streak_count(completions: &[HabitCompletion], habit_id: &HabitId, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    while completed_on(completions, habit_id, day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

/// Completion rate over the inclusive window of `window_days` days ending
/// at `today`, as a percentage in 0..=100.
pub fn completion_rate(
    completions: &[HabitCompletion],
    habit_id: &HabitId,
    today: NaiveDate,
    window_days: u32,
) -> f64 {
    if window_days == 0 {
        return 0.0;
    }

    let completed_days = (0..window_days)
        .filter(|offset| {
            completed_on(completions, habit_id, today - Duration::days(i64::from(*offset)))
        })
        .count();

    completed_days as f64 / f64::from(window_days) * 100.0
}
