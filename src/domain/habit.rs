//! Habit entity, its identifier, and the partial-update patch.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit.
///
/// A wrapper around a v4 UUID. Opaque to all store logic; the UUID makes
/// collisions a non-concern without needing a timestamp component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a fresh random habit ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form (CLI arguments, stored data).
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// How often a habit applies.
///
/// `Daily` and `Weekly` habits apply every day; `Custom` habits apply only
/// on the weekdays listed in [`Habit::frequency_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Custom,
}

/// A habit the user tracks: a recurring activity with a frequency rule
/// and a per-day goal count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, immutable after creation.
    pub id: HabitId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Free-form grouping label.
    pub category: String,
    /// How often this habit applies.
    pub frequency: Frequency,
    /// Weekday set for `Custom` frequency. A custom habit without a day
    /// set applies every day.
    pub frequency_days: Option<Vec<Weekday>>,
    /// When this habit was created. Set once, never updated.
    pub created_at: DateTime<Utc>,
    /// Display color, opaque to all logic.
    pub color: String,
    /// Completion count that fills one daily goal cycle. At least 1.
    pub daily_goal: u32,
    /// Caller-supplied scoring attribute, opaque to all logic.
    pub points: u32,
}

/// Input for creating a habit: every [`Habit`] field except the
/// store-assigned `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: String,
    pub category: String,
    pub frequency: Frequency,
    pub frequency_days: Option<Vec<Weekday>>,
    pub color: String,
    pub daily_goal: u32,
    pub points: u32,
}

/// Partial update for a habit.
///
/// Fields left as `None` keep their current value. `frequency_days` is
/// doubly optional so that clearing the set (`Some(None)`) and leaving it
/// unchanged (`None`) stay distinct.
#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<Frequency>,
    pub frequency_days: Option<Option<Vec<Weekday>>>,
    pub color: Option<String>,
    pub daily_goal: Option<u32>,
    pub points: Option<u32>,
}

impl Habit {
    /// Create a new habit with validation, stamping a fresh ID and the
    /// current time as `created_at`.
    pub fn create(new: NewHabit) -> Result<Self, DomainError> {
        Self::validate_name(&new.name)?;
        Self::validate_goal(new.daily_goal)?;
        Self::validate_frequency_days(&new.frequency_days)?;

        Ok(Self {
            id: HabitId::new(),
            name: new.name,
            description: new.description,
            category: new.category,
            frequency: new.frequency,
            frequency_days: new.frequency_days,
            created_at: Utc::now(),
            color: new.color,
            daily_goal: new.daily_goal,
            points: new.points,
        })
    }

    /// Merge a patch over this habit with validation.
    ///
    /// Validates every incoming field before applying any of them, so a
    /// failed patch leaves the habit untouched. `id` and `created_at`
    /// cannot be patched.
    pub fn apply(&mut self, patch: HabitPatch) -> Result<(), DomainError> {
        if let Some(ref name) = patch.name {
            Self::validate_name(name)?;
        }
        if let Some(goal) = patch.daily_goal {
            Self::validate_goal(goal)?;
        }
        if let Some(ref days) = patch.frequency_days {
            Self::validate_frequency_days(days)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(frequency_days) = patch.frequency_days {
            self.frequency_days = frequency_days;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(daily_goal) = patch.daily_goal {
            self.daily_goal = daily_goal;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }

        Ok(())
    }

    /// Whether this habit is applicable on the given date.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily | Frequency::Weekly => true,
            Frequency::Custom => match &self.frequency_days {
                Some(days) => days.contains(&date.weekday()),
                // No day set on a custom habit means it applies every day.
                None => true,
            },
        }
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "habit name cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > 100 {
            return Err(DomainError::InvalidName(
                "habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_goal(goal: u32) -> Result<(), DomainError> {
        if goal == 0 {
            return Err(DomainError::InvalidGoal(
                "daily goal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_frequency_days(days: &Option<Vec<Weekday>>) -> Result<(), DomainError> {
        if let Some(days) = days {
            if days.is_empty() {
                return Err(DomainError::InvalidFrequencyDays(
                    "day set cannot be empty when present".to_string(),
                ));
            }
            if days.len() > 7 {
                return Err(DomainError::InvalidFrequencyDays(
                    "day set cannot have more than 7 entries".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Convert a 0=Sunday..6=Saturday index into a weekday.
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
