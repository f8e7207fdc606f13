use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(data: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("actstream").unwrap();
    cmd.arg("--data").arg(data);
    cmd
}

#[test]
fn create_then_get_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args([
            "create",
            "--component",
            "profile",
            "--type",
            "new_member",
            "--user-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created activity item 1"));

    cmd(&data)
        .args(["get", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new_member"))
        .stdout(predicate::str::contains("became a registered member"));
}

#[test]
fn list_formats() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["create", "--component", "profile", "--type", "new_avatar"])
        .assert()
        .success();

    cmd(&data)
        .args(["list", "--format", "ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));

    cmd(&data)
        .args(["list", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));

    cmd(&data)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,user_id,component,type"))
        .stdout(predicate::str::contains("profile,new_avatar"));

    cmd(&data)
        .args(["list", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("component: profile"));
}

#[test]
fn spam_and_ham_moderation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["create", "--component", "profile", "--type", "new_member"])
        .assert()
        .success();

    cmd(&data)
        .args(["spam", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as spam"));

    cmd(&data)
        .args(["list", "--spam", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));

    cmd(&data)
        .args(["ham", "1"])
        .assert()
        .success();

    cmd(&data)
        .args(["list", "--spam", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn comment_threading_and_removal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["post-update", "--user-id", "1", "--content", "first post"])
        .assert()
        .success();

    cmd(&data)
        .args(["comment", "1", "--user-id", "2", "--content", "well said"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added comment 2 to activity item 1"));

    // replying to the comment still lands on the root thread
    cmd(&data)
        .args(["comment", "2", "--user-id", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to activity item 1"));

    cmd(&data)
        .args(["delete-comment", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted comment 2"));

    // comment 3 was threaded under comment 2 and went with it
    cmd(&data)
        .args(["list", "--type", "activity_comment", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn permalink_resolution() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["create", "--component", "profile", "--type", "new_member"])
        .assert()
        .success();

    cmd(&data)
        .args(["permalink", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/activity/p/1/"));

    cmd(&data)
        .args(["url", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/activity/p/1/"));
}

#[test]
fn delete_removes_the_row() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["create", "--component", "profile", "--type", "new_member"])
        .assert()
        .success();

    cmd(&data).args(["delete", "1"]).assert().success();

    cmd(&data)
        .args(["list", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn generate_zero_is_a_successful_noop() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["generate", "--count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 0"));

    cmd(&data)
        .args(["list", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn generate_batch_shares_one_type() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["generate", "--count", "8", "--component", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 8"));

    cmd(&data)
        .args(["list", "--format", "count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("8\n"));

    // one type for the whole batch: exactly one of the three profile types
    // accounts for all eight rows
    let out = cmd(&data)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let first = rows[0]["type"].as_str().unwrap().to_string();
    assert!(rows
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["type"] == first.as_str()));
}

#[test]
fn missing_ids_fail_with_nonzero_status() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("platform.json");

    cmd(&data)
        .args(["get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity not found: 42"));

    cmd(&data)
        .args(["delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
