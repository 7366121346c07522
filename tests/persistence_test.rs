//! On-disk round-trip checks: a store reopened over the same directory
//! must observe every prior mutation.

use chrono::NaiveDate;
use habitual::{
    FileStorage, Frequency, HabitStore, NewHabit, StoreError, ThemeStore,
};

fn draft(name: &str) -> NewHabit {
    NewHabit {
        name: name.to_string(),
        description: "test habit".to_string(),
        category: "general".to_string(),
        frequency: Frequency::Daily,
        frequency_days: None,
        color: "#4f46e5".to_string(),
        daily_goal: 2,
        points: 3,
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
}

#[test]
fn habits_round_trip_field_for_field() {
    let dir = tempfile::tempdir().unwrap();

    let added = {
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut store = HabitStore::open(storage).unwrap();
        store.add_habit(draft("Journal")).unwrap()
    };

    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let store = HabitStore::open(storage).unwrap();

    assert_eq!(store.habits().len(), 1);
    assert_eq!(*store.habit_by_id(&added.id).unwrap(), added);
}

#[test]
fn completions_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut store = HabitStore::open(storage).unwrap();
        let habit = store.add_habit(draft("Water")).unwrap();
        store.toggle_completion(&habit.id, day()).unwrap();
        store.toggle_completion(&habit.id, day()).unwrap();
        habit.id
    };

    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let store = HabitStore::open(storage).unwrap();

    assert!(store.completion_status(&id, day()));
    assert_eq!(store.completion_count(&id, day()), 2);
}

#[test]
fn delete_is_durable() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut store = HabitStore::open(storage).unwrap();
        let habit = store.add_habit(draft("Run")).unwrap();
        store.toggle_completion(&habit.id, day()).unwrap();
        store.delete_habit(&habit.id).unwrap();
    }

    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let store = HabitStore::open(storage).unwrap();

    assert!(store.habits().is_empty());
    assert!(store.completions().is_empty());
}

#[test]
fn malformed_habits_file_fails_open_with_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("habits.json"), "{ not json").unwrap();

    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    match HabitStore::open(storage).err() {
        Some(StoreError::Corrupt { key, .. }) => assert_eq!(key, "habits"),
        other => panic!("expected corrupt-key error, got {other:?}"),
    }
}

#[test]
fn theme_preference_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut theme = ThemeStore::open(storage, None).unwrap();
        assert!(theme.toggle_dark_mode().unwrap());
    }

    // The persisted value wins even over a light system preference.
    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let theme = ThemeStore::open(storage, Some(false)).unwrap();
    assert!(theme.dark_mode());
}

#[test]
fn theme_seeds_from_system_preference_when_unpersisted() {
    let dir = tempfile::tempdir().unwrap();

    let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let theme = ThemeStore::open(storage, Some(true)).unwrap();
    assert!(theme.dark_mode());
}
