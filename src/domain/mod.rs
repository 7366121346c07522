//! Core entities and pure logic: habits, completion records, and the
//! date-walk statistics derived from them.
//!
//! Nothing in this module touches storage or the clock; every
//! date-dependent calculation takes its reference date as a parameter.

pub mod completion;
pub mod habit;
pub mod stats;

pub use completion::HabitCompletion;
pub use habit::{Frequency, Habit, HabitId, HabitPatch, NewHabit};

use thiserror::Error;

/// Errors that can occur while validating habit data.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid habit name: {0}")]
    InvalidName(String),

    #[error("invalid daily goal: {0}")]
    InvalidGoal(String),

    #[error("invalid frequency days: {0}")]
    InvalidFrequencyDays(String),
}
