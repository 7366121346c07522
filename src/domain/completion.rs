//! Per-day completion records and the goal-cycle state machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;

/// Progress state for one habit on one calendar day.
///
/// At most one record exists per `(habit_id, date)` pair; the habit store
/// enforces this by only creating a record on the first toggle for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCompletion {
    /// The habit this record belongs to. Weak reference: cleanup happens
    /// only through the habit-delete cascade.
    pub habit_id: HabitId,
    /// Calendar day this record is for.
    pub date: NaiveDate,
    /// Whether the current goal cycle has been entered.
    pub completed: bool,
    /// Progress count within the current cycle.
    pub count: u32,
}

impl HabitCompletion {
    /// Record created by the first toggle for a `(habit, date)` pair.
    pub fn first(habit_id: HabitId, date: NaiveDate) -> Self {
        Self {
            habit_id,
            date,
            completed: true,
            count: 1,
        }
    }

    /// Advance the record by one toggle of the goal cycle.
    ///
    /// From a not-completed state a toggle starts a new cycle at
    /// `(completed, count) = (true, 1)`; the count is force-set, not
    /// incremented. From a completed state a toggle increments the count
    /// up to `daily_goal`, and the tap that reaches the goal rolls the
    /// record over to `(false, 0)` in the same step.
    ///
    /// The rollover is intentional: a record never rests in a "fully met,
    /// still marked complete" state, and with `daily_goal = 1` each toggle
    /// simply alternates between `(true, 1)` and `(false, 0)`.
    pub fn advance(&mut self, daily_goal: u32) {
        if self.completed {
            if self.count < daily_goal {
                self.count += 1;
            }
            if self.count >= daily_goal {
                self.completed = false;
                self.count = 0;
            }
        } else {
            self.completed = true;
            self.count = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> HabitCompletion {
        HabitCompletion::first(
            HabitId::new(),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        )
    }

    #[test]
    fn first_toggle_enters_the_cycle() {
        let completion = fresh();
        assert!(completion.completed);
        assert_eq!(completion.count, 1);
    }

    #[test]
    fn goal_of_three_cycles_through_reset() {
        let mut completion = fresh();

        completion.advance(3);
        assert_eq!((completion.completed, completion.count), (true, 2));

        completion.advance(3);
        assert_eq!((completion.completed, completion.count), (false, 0));

        completion.advance(3);
        assert_eq!((completion.completed, completion.count), (true, 1));
    }

    #[test]
    fn goal_of_one_alternates() {
        let mut completion = fresh();

        completion.advance(1);
        assert_eq!((completion.completed, completion.count), (false, 0));

        completion.advance(1);
        assert_eq!((completion.completed, completion.count), (true, 1));
    }

    #[test]
    fn toggle_from_not_completed_resets_count_to_one() {
        let mut completion = fresh();
        completion.completed = false;
        completion.count = 2;

        completion.advance(5);
        assert_eq!((completion.completed, completion.count), (true, 1));
    }

    #[test]
    fn count_already_at_goal_rolls_over_without_incrementing() {
        let mut completion = fresh();
        completion.count = 4;

        completion.advance(4);
        assert_eq!((completion.completed, completion.count), (false, 0));
    }
}
