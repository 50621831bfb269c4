//! Integration tests for the delve CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn delve() -> Command {
    Command::cargo_bin("delve").unwrap()
}

/// `delve play` with a fixed seed and its save file in `dir`.
fn play_in(dir: &TempDir) -> Command {
    let mut cmd = delve();
    cmd.current_dir(dir.path()).args(["play", "--seed", "7"]);
    cmd
}

fn cottage(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cottage.json");
    fs::write(
        &path,
        r#"{
  "title": "Cottage",
  "introduction": "A cottage in the woods.",
  "start": "kitchen",
  "rooms": [
    {
      "name": "kitchen",
      "description": "A warm kitchen.",
      "items": [{ "name": "pie", "description": "Apple pie.", "points": 7 }],
      "transitions": [{ "token": "out", "target": "garden" }]
    },
    { "name": "garden", "description": "Fresh air at last.", "is_final": true }
  ]
}"#,
    )
    .unwrap();
    path
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn walking_out_ends_with_score() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("south\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mysterious letter"))
        .stdout(predicate::str::contains("Troll is now in laboratory."))
        .stdout(predicate::str::contains("You are in the entrance hall."))
        .stdout(predicate::str::contains("you never return."))
        .stdout(predicate::str::ends_with("Your score was: 0\n"));
}

#[test]
fn unknown_command_is_invalid() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("asdf\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid action."));
}

#[test]
fn empty_pickup_is_not_invalid() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("pick up rock\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You don't find that item in this room."))
        .stdout(predicate::str::contains("Invalid action.").not());
}

#[test]
fn pickup_scores() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("north\npick up fancy rug\npick up trophy case\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fancy rug: (100 gold) A large, oriental-style rug with exceptional craftsmanship.",
        ))
        .stdout(predicate::str::contains("Your score was: 250"));
}

#[test]
fn destroying_the_harpsichord_reveals_gold() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin(
            "north\npick up elven sword\nwest\nattack harpsichord with elven sword\npick up gold\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You destroy the harpsichord with the elven sword.",
        ))
        .stdout(predicate::str::contains("A destroyed harpsichord, worth 0."))
        .stdout(predicate::str::contains("Your score was: 250"));
}

#[test]
fn save_and_load_in_working_directory() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("north\npick up fancy rug\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Save complete!"));
    assert!(dir.path().join("SavedGame.json").exists());

    play_in(&dir)
        .write_stdin("load\ndrop fancy rug\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded!"))
        .stdout(predicate::str::contains("You are in the living room."))
        .stdout(predicate::str::contains("Your score was: 0"));
}

#[test]
fn custom_save_file() {
    let dir = TempDir::new().unwrap();
    let slot = dir.path().join("slot.json");
    delve()
        .args(["play", "--seed", "1", "--save-file"])
        .arg(&slot)
        .write_stdin("save\nquit\n")
        .assert()
        .success();
    let text = fs::read_to_string(&slot).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["state"]["current"], "entrance hall");
}

#[test]
fn load_without_save_fails() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .write_stdin("load\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: no saved game"));
}

#[test]
fn play_custom_story() {
    let dir = TempDir::new().unwrap();
    let story = cottage(&dir);
    play_in(&dir)
        .arg("--story")
        .arg(&story)
        .write_stdin("pick up pie\nout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A cottage in the woods."))
        .stdout(predicate::str::contains("Fresh air at last."))
        .stdout(predicate::str::contains("Your score was: 7"));
}

#[test]
fn logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    play_in(&dir)
        .args(["--log-level", "info"])
        .write_stdin("north\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("player_moved").not())
        .stderr(predicate::str::contains("player_moved"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_story() {
    delve()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Inheritance"))
        .stdout(predicate::str::contains("10 rooms (2 final)"));
}

#[test]
fn check_story_file() {
    let dir = TempDir::new().unwrap();
    let story = cottage(&dir);
    delve()
        .arg("check")
        .arg(&story)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rooms (1 final), 1 items, 0 enemies"));
}

#[test]
fn check_rejects_dangling_transition() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "title": "Broken", "start": "a",
             "rooms": [{ "name": "a", "description": "",
                         "transitions": [{ "token": "north", "target": "nowhere" }] }] }"#,
    )
    .unwrap();
    delve()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn check_missing_file() {
    delve()
        .args(["check", "/no/such/story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_builtin_to_stdout() {
    let output = delve().arg("export").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "The Inheritance");
    assert_eq!(value["rooms"].as_array().unwrap().len(), 10);
}

#[test]
fn exported_story_plays() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inheritance.json");
    delve()
        .args(["export", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    play_in(&dir)
        .arg("--story")
        .arg(&path)
        .write_stdin("south\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your score was: 0"));
}
