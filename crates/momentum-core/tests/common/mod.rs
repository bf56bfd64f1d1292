#![allow(dead_code)]

use std::path::PathBuf;

use momentum_core::{
    params::{CreateGoal, StepCreate},
    Goal, GoalStore, GoalStoreBuilder, Intensity,
};
use tempfile::TempDir;

/// Helper function to create a store backed by JSON files in a temp dir
pub fn create_json_store() -> (TempDir, GoalStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_json_store(temp_dir.path().to_path_buf());
    (temp_dir, store)
}

/// Reopens a JSON-backed store over an existing directory
pub fn open_json_store(dir: PathBuf) -> GoalStore {
    GoalStoreBuilder::new()
        .with_data_dir(Some(dir))
        .build()
        .expect("Failed to create store")
}

/// Helper function to create a store backed by a SQLite file in a temp dir
pub fn create_sqlite_store() -> (TempDir, PathBuf, GoalStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("momentum.db");
    let store = GoalStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, db_path, store)
}

/// Creates a goal with the given step titles
pub fn goal_with_steps(store: &mut GoalStore, name: &str, steps: &[&str]) -> Goal {
    let mut params = CreateGoal::new(name, Intensity::Moderate);
    params.initial_steps = steps.iter().map(|title| StepCreate::titled(*title)).collect();
    store.create_goal(&params).expect("Failed to create goal")
}
