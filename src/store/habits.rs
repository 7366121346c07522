//! The habit store: owns the habit list and the per-day completion
//! records, and exposes every query and mutation over them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{stats, Habit, HabitCompletion, HabitId, HabitPatch, NewHabit};
use crate::storage::KeyValueStorage;
use crate::store::StoreError;

/// Storage key for the habit collection.
pub const HABITS_KEY: &str = "habits";
/// Storage key for the completion records.
pub const COMPLETIONS_KEY: &str = "completions";

/// Owner of the habit and completion collections.
///
/// Both collections are mutated only through this store; every mutation
/// persists its affected collection(s) before returning.
pub struct HabitStore<S: KeyValueStorage> {
    storage: S,
    habits: Vec<Habit>,
    completions: Vec<HabitCompletion>,
}

impl<S: KeyValueStorage> HabitStore<S> {
    /// Open the store, rehydrating both collections from storage.
    ///
    /// An absent key starts the corresponding collection empty; a stored
    /// value that fails to parse surfaces as [`StoreError::Corrupt`]
    /// naming the offending key, rather than being silently discarded.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let habits: Vec<Habit> = load_collection(&storage, HABITS_KEY)?;
        let completions: Vec<HabitCompletion> = load_collection(&storage, COMPLETIONS_KEY)?;

        tracing::debug!(
            habits = habits.len(),
            completions = completions.len(),
            "habit store opened"
        );

        Ok(Self {
            storage,
            habits,
            completions,
        })
    }

    // Mutations

    /// Create a habit from the given draft, append it, and persist.
    ///
    /// The store assigns a fresh unique id and stamps `created_at` with
    /// the current time; both are immutable afterwards.
    pub fn add_habit(&mut self, new: NewHabit) -> Result<Habit, StoreError> {
        let habit = Habit::create(new)?;
        self.habits.push(habit.clone());
        self.persist_habits()?;

        tracing::debug!(id = %habit.id, name = %habit.name, "habit added");
        Ok(habit)
    }

    /// Merge a patch over the habit with the given id and persist.
    ///
    /// Returns `Ok(None)` without mutating or persisting anything when no
    /// habit has that id.
    pub fn update_habit(
        &mut self,
        id: &HabitId,
        patch: HabitPatch,
    ) -> Result<Option<Habit>, StoreError> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == *id) else {
            return Ok(None);
        };

        habit.apply(patch)?;
        let updated = habit.clone();
        self.persist_habits()?;

        Ok(Some(updated))
    }

    /// Remove the habit with the given id and every completion record
    /// referencing it, then persist both collections. No-op if absent.
    pub fn delete_habit(&mut self, id: &HabitId) -> Result<(), StoreError> {
        self.habits.retain(|h| h.id != *id);
        self.completions.retain(|c| c.habit_id != *id);

        self.persist_habits()?;
        self.persist_completions()?;

        tracing::debug!(id = %id, "habit deleted");
        Ok(())
    }

    /// Advance the goal cycle for `(id, date)` by one toggle and persist.
    ///
    /// Creates the record at `(completed, count) = (true, 1)` on the first
    /// toggle for the pair; subsequent toggles follow
    /// [`HabitCompletion::advance`]. Toggling a nonexistent habit is a
    /// no-op.
    pub fn toggle_completion(&mut self, id: &HabitId, date: NaiveDate) -> Result<(), StoreError> {
        let Some(goal) = self.habit_by_id(id).map(|h| h.daily_goal) else {
            return Ok(());
        };

        match self
            .completions
            .iter_mut()
            .find(|c| c.habit_id == *id && c.date == date)
        {
            Some(completion) => completion.advance(goal),
            None => self.completions.push(HabitCompletion::first(id.clone(), date)),
        }

        self.persist_completions()
    }

    // Queries

    /// The habit with the given id, if any.
    pub fn habit_by_id(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == *id)
    }

    /// Whether the goal cycle for `(id, date)` is currently entered.
    /// `false` when no record exists.
    pub fn completion_status(&self, id: &HabitId, date: NaiveDate) -> bool {
        self.completion_for(id, date).map_or(false, |c| c.completed)
    }

    /// Progress count for `(id, date)`. `0` when no record exists.
    pub fn completion_count(&self, id: &HabitId, date: NaiveDate) -> u32 {
        self.completion_for(id, date).map_or(0, |c| c.count)
    }

    /// Consecutive completed days ending at `today`.
    pub fn streak_count(&self, id: &HabitId, today: NaiveDate) -> u32 {
        stats::streak_count(&self.completions, id, today)
    }

    /// Percentage of completed days over the trailing `window_days`-day
    /// window ending at `today`.
    pub fn completion_rate(&self, id: &HabitId, window_days: u32, today: NaiveDate) -> f64 {
        stats::completion_rate(&self.completions, id, today, window_days)
    }

    /// Habits applicable on the given day, in insertion order.
    pub fn todays_habits(&self, today: NaiveDate) -> Vec<&Habit> {
        self.habits.iter().filter(|h| h.applies_on(today)).collect()
    }

    /// Habits grouped by category, preserving insertion order within each
    /// group.
    pub fn habits_by_category(&self) -> BTreeMap<&str, Vec<&Habit>> {
        let mut groups: BTreeMap<&str, Vec<&Habit>> = BTreeMap::new();
        for habit in &self.habits {
            groups.entry(habit.category.as_str()).or_default().push(habit);
        }
        groups
    }

    /// All habits in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// All completion records.
    pub fn completions(&self) -> &[HabitCompletion] {
        &self.completions
    }

    fn completion_for(&self, id: &HabitId, date: NaiveDate) -> Option<&HabitCompletion> {
        self.completions
            .iter()
            .find(|c| c.habit_id == *id && c.date == date)
    }

    fn persist_habits(&mut self) -> Result<(), StoreError> {
        persist_collection(&mut self.storage, HABITS_KEY, &self.habits)
    }

    fn persist_completions(&mut self) -> Result<(), StoreError> {
        persist_collection(&mut self.storage, COMPLETIONS_KEY, &self.completions)
    }
}

fn load_collection<S, T>(storage: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

fn persist_collection<S, T>(storage: &mut S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    S: KeyValueStorage,
    T: Serialize,
{
    let raw = serde_json::to_string(items)?;
    storage.set(key, &raw)?;
    Ok(())
}
