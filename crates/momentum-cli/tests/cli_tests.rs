use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a data dir
fn momentum_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("momentum").expect("Failed to find momentum binary");
    cmd.arg("--no-color")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

/// Pulls the ID out of a "Created ... with ID: <id>" line
fn created_id(stdout: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    stdout
        .lines()
        .find_map(|line| line.split_once("with ID: ").map(|(_, id)| id.trim().to_string()))
        .expect("Output should contain a created ID")
}

fn create_goal(data_dir: &Path, args: &[&str]) -> String {
    let output = momentum_cmd(data_dir)
        .args(["goal", "create"])
        .args(args)
        .output()
        .expect("Failed to run momentum");
    assert!(output.status.success());
    created_id(&output.stdout)
}

#[test]
fn test_cli_empty_state() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Active goals**: 0"))
        .stdout(predicate::str::contains("No goals yet."));
}

#[test]
fn test_cli_create_goal_with_steps() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .args([
            "goal",
            "create",
            "Run a 5k",
            "--intensity",
            "intense",
            "--target-date",
            "2026-09-01",
            "-s",
            "Walk 1km",
            "-s",
            "Walk 2km",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal with ID: "))
        .stdout(predicate::str::contains("## Run a 5k"))
        .stdout(predicate::str::contains("- **Intensity**: Intense"))
        .stdout(predicate::str::contains("- **Target**: Sep 1, 2026"))
        .stdout(predicate::str::contains("1. ○ Walk 1km"))
        .stdout(predicate::str::contains("2. ○ Walk 2km"));

    assert!(temp_dir.path().join("momentum-goals.json").exists());
}

#[test]
fn test_cli_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .args(["goal", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create goal"));
}

#[test]
fn test_cli_rejects_bad_target_date() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .args(["goal", "create", "Swim", "--target-date", "next week"])
        .assert()
        .failure();
}

#[test]
fn test_cli_step_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let goal_id = create_goal(temp_dir.path(), &["Run a 5k"]);

    let output = momentum_cmd(temp_dir.path())
        .args(["step", "add", &goal_id, "Walk 1km", "--notes", "Easy pace"])
        .output()
        .expect("Failed to run momentum");
    assert!(output.status.success());
    let step_id = created_id(&output.stdout);

    momentum_cmd(temp_dir.path())
        .args(["step", "add", &goal_id, "Walk 2km"])
        .assert()
        .success();

    momentum_cmd(temp_dir.path())
        .args(["step", "toggle", &step_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("as complete"));

    momentum_cmd(temp_dir.path())
        .args(["goal", "show", &goal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Progress**: 50% (1/2 steps)"))
        .stdout(predicate::str::contains("1. ✓ Walk 1km"))
        .stdout(predicate::str::contains("Easy pace"));

    momentum_cmd(temp_dir.path())
        .args(["step", "move", &goal_id, "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Moved step from position 2 to 1"))
        .stdout(predicate::str::contains("1. ○ Walk 2km"))
        .stdout(predicate::str::contains("2. ✓ Walk 1km"));

    momentum_cmd(temp_dir.path())
        .args(["step", "remove", &step_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed step 'Walk 1km'"));

    momentum_cmd(temp_dir.path())
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Steps remaining**: 1"))
        .stdout(predicate::str::contains("- **Completed**: 0/1"));
}

#[test]
fn test_cli_move_out_of_range() {
    let temp_dir = create_cli_test_environment();
    let goal_id = create_goal(temp_dir.path(), &["Row", "-s", "Technique"]);

    momentum_cmd(temp_dir.path())
        .args(["step", "move", &goal_id, "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to move step"));

    momentum_cmd(temp_dir.path())
        .args(["step", "move", &goal_id, "0", "1"])
        .assert()
        .failure();
}

#[test]
fn test_cli_update_goal() {
    let temp_dir = create_cli_test_environment();
    let goal_id = create_goal(
        temp_dir.path(),
        &["Swim", "--description", "Pool", "--target-date", "2026-06-01"],
    );

    momentum_cmd(temp_dir.path())
        .args([
            "goal",
            "update",
            &goal_id,
            "--name",
            "Swim 1 mile",
            "--clear-description",
            "--intensity",
            "light",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated goal with ID: "))
        .stdout(predicate::str::contains("- Renamed to \"Swim 1 mile\""))
        .stdout(predicate::str::contains("- Cleared description"))
        .stdout(predicate::str::contains("- Set intensity to Light"))
        .stdout(predicate::str::contains("## Swim 1 mile"))
        .stdout(predicate::str::contains("Pool").not());

    momentum_cmd(temp_dir.path())
        .args(["goal", "update", &goal_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_delete_goal() {
    let temp_dir = create_cli_test_environment();
    let goal_id = create_goal(temp_dir.path(), &["Cycle 50km", "-s", "Ride 10km"]);

    momentum_cmd(temp_dir.path())
        .args(["goal", "delete", &goal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted goal 'Cycle 50km'"));

    momentum_cmd(temp_dir.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals yet."));
}

#[test]
fn test_cli_not_found_fails() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .args(["goal", "show", "missing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: Goal missing not found"));

    momentum_cmd(temp_dir.path())
        .args(["step", "toggle", "missing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: Step missing not found"));

    momentum_cmd(temp_dir.path())
        .args(["step", "add", "missing", "Orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to add step"));
}

#[test]
fn test_cli_list_newest_first() {
    let temp_dir = create_cli_test_environment();
    create_goal(temp_dir.path(), &["First goal"]);
    create_goal(temp_dir.path(), &["Second goal"]);

    let output = momentum_cmd(temp_dir.path())
        .args(["goal", "list"])
        .output()
        .expect("Failed to run momentum");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("## First goal").expect("First goal listed");
    let second = stdout.find("## Second goal").expect("Second goal listed");
    assert!(second < first);
}

#[test]
fn test_cli_sqlite_backend() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("momentum.db");
    let db_arg = db_path.to_str().unwrap();

    momentum_cmd(temp_dir.path())
        .args(["--database-file", db_arg, "goal", "create", "Deadlift 100kg"])
        .assert()
        .success();

    assert!(db_path.exists());
    assert!(!temp_dir.path().join("momentum-goals.json").exists());

    momentum_cmd(temp_dir.path())
        .args(["--database-file", db_arg, "goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Deadlift 100kg"));
}

#[test]
fn test_cli_in_memory_does_not_save() {
    let temp_dir = create_cli_test_environment();

    momentum_cmd(temp_dir.path())
        .args(["--in-memory", "goal", "create", "Ephemeral"])
        .assert()
        .success();

    assert!(!temp_dir.path().join("momentum-goals.json").exists());
}

#[test]
fn test_cli_saved_file_shape() {
    let temp_dir = create_cli_test_environment();
    create_goal(temp_dir.path(), &["Run", "-s", "Walk 1km"]);

    let raw = std::fs::read_to_string(temp_dir.path().join("momentum-goals.json"))
        .expect("Save file should exist");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("Save file is JSON");

    assert_eq!(json["goals"][0]["name"], "Run");
    assert_eq!(json["goals"][0]["intensity"], "moderate");
    assert!(json["goals"][0]["createdAt"].is_string());
    assert!(json["goals"][0].get("description").is_none());
    assert_eq!(json["steps"][0]["goalId"], json["goals"][0]["id"]);
    assert_eq!(json["steps"][0]["order"], 0);
    assert_eq!(json["steps"][0]["completed"], false);
}
