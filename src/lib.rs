//! Local habit tracking: habits, per-day completions, and the statistics
//! derived from them (streaks, completion rates, category groupings).
//!
//! Two independent stores, each owning its collections and persisting
//! every mutation synchronously to a string-keyed JSON medium:
//!
//! - [`HabitStore`] owns the habit list and the completion records and
//!   exposes all queries and mutations over them.
//! - [`ThemeStore`] owns the dark-mode preference.
//!
//! Neither store depends on the other; both rehydrate from their
//! [`KeyValueStorage`] at construction. Date-dependent queries take their
//! reference date explicitly, so callers (and tests) control time.

pub mod domain;
pub mod storage;
pub mod store;

pub use domain::{
    DomainError, Frequency, Habit, HabitCompletion, HabitId, HabitPatch, NewHabit,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{HabitStore, StoreError, ThemeStore};
