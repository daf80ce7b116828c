//! Integration tests for the `reveal` CLI.
//!
//! Each test runs `reveal` as a subprocess inside a temp directory and
//! verifies stdout and/or the task snapshot it leaves behind.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `reveal` in `dir`, return (stdout, stderr, success).
fn run_reveal(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_reveal"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run reveal");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `reveal` expecting success, return stdout.
fn run_reveal_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_reveal(dir, args);
    if !success {
        panic!(
            "reveal {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn write_tasks(dir: &Path) {
    fs::write(
        dir.join("tasks.json"),
        r#"[
  { "id": "1", "text": "Buy milk", "isChecked": false, "date": "01.05.2025" },
  { "id": "2", "text": "Call mom", "isChecked": true, "date": "02.05.2025" }
]"#,
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

#[test]
fn test_list_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_reveal_ok(tmp.path(), &["list"]);
    assert_eq!(out.trim(), "no tasks");
}

#[test]
fn test_list_existing() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    let out = run_reveal_ok(tmp.path(), &["list"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[ ] 1 Buy milk  (01.05.2025)",
            "[x] 2 Call mom  (02.05.2025)"
        ]
    );
}

#[test]
fn test_add_assigns_next_id() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    let out = run_reveal_ok(tmp.path(), &["add", "Walk the dog"]);
    assert_eq!(out.trim(), "3");

    let saved = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(saved.contains("\"Walk the dog\""));
    assert!(saved.contains("\"isChecked\": false"));
}

#[test]
fn test_add_blank_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_reveal(tmp.path(), &["add", "   "]);
    assert!(!success);
    assert!(stderr.starts_with("error:"));
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn test_edit_and_toggle() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());

    let out = run_reveal_ok(tmp.path(), &["edit", "1", "Buy oat milk"]);
    assert_eq!(out.trim(), "[ ] 1 Buy oat milk  (01.05.2025)");

    let out = run_reveal_ok(tmp.path(), &["toggle", "1"]);
    assert_eq!(out.trim(), "[x] 1 Buy oat milk  (01.05.2025)");

    let out = run_reveal_ok(tmp.path(), &["edit", "2", "Call mom", "--checked", "false"]);
    assert_eq!(out.trim(), "[ ] 2 Call mom  (02.05.2025)");
}

#[test]
fn test_edit_unknown_id_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    let (_, stderr, success) = run_reveal(tmp.path(), &["edit", "9", "nothing"]);
    assert!(!success);
    assert!(stderr.contains('9'));
}

#[test]
fn test_delete_keeps_order() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    run_reveal_ok(tmp.path(), &["add", "Third"]);
    run_reveal_ok(tmp.path(), &["delete", "2"]);

    let out = run_reveal_ok(tmp.path(), &["list"]);
    let ids: Vec<&str> = out
        .lines()
        .map(|l| l.split_whitespace().nth(2).unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_delete_echoes_removed_record() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    let out = run_reveal_ok(tmp.path(), &["delete", "2"]);
    assert_eq!(out.trim(), "[x] 2 Call mom  (02.05.2025)");

    let out = run_reveal_ok(tmp.path(), &["--json", "delete", "1"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], "1");
    assert_eq!(value["text"], "Buy milk");

    assert_eq!(run_reveal_ok(tmp.path(), &["list"]).trim(), "no tasks");
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_tasks(tmp.path());
    let out = run_reveal_ok(tmp.path(), &["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tasks = value["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1]["isChecked"], true);
    assert_eq!(tasks[0]["text"], "Buy milk");
}

#[test]
fn test_custom_tasks_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_reveal_ok(tmp.path(), &["--tasks", "other.json", "add", "elsewhere"]);
    assert!(tmp.path().join("other.json").exists());
    assert!(!tmp.path().join("tasks.json").exists());
}

// ---------------------------------------------------------------------------
// Gesture commands
// ---------------------------------------------------------------------------

#[test]
fn test_settle_half_width_rule() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "50", "100"]).trim(), "open");
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "49", "100"]).trim(), "closed");
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "0", "100"]).trim(), "closed");
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "100", "100"]).trim(), "open");
    // Degenerate width never opens
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "5", "0"]).trim(), "closed");
}

#[test]
fn test_settle_uses_configured_threshold() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("reveal.toml"),
        "[gesture]\nopen_threshold = 0.3\n",
    )
    .unwrap();
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "30", "100"]).trim(), "open");
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "29", "100"]).trim(), "closed");
}

#[test]
fn test_settle_out_of_range_threshold_falls_back_to_half() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("reveal.toml"),
        "[gesture]\nopen_threshold = 2.0\n",
    )
    .unwrap();
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "50", "100"]).trim(), "open");
    assert_eq!(run_reveal_ok(tmp.path(), &["settle", "49", "100"]).trim(), "closed");
}

#[test]
fn test_settle_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_reveal_ok(tmp.path(), &["--json", "settle", "70", "100"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["resting_offset"], 100.0);
}

const TWO_ROW_SCRIPT: &str = r#"
[[rows]]
id = "a"
width = 100.0

[[rows]]
id = "b"
width = 100.0

[[events]]
kind = "drag"
row = "a"
delta = -60.0

[[events]]
kind = "release"
row = "a"

[[events]]
kind = "drag"
row = "b"
delta = -10.0
"#;

#[test]
fn test_replay_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("swipe.toml"), TWO_ROW_SCRIPT).unwrap();
    let out = run_reveal_ok(tmp.path(), &["replay", "swipe.toml"]);

    assert!(out.contains("apply a 60"));
    assert!(out.contains("animate a -> 100 (200ms)"));
    // Opening b force-closes a first
    let close_a = out.find("animate a -> 0 (300ms)").unwrap();
    let apply_b = out.find("apply b 10").unwrap();
    assert!(close_a < apply_b);
    assert!(out.trim_end().ends_with("open: b"));
}

#[test]
fn test_replay_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("swipe.toml"), TWO_ROW_SCRIPT).unwrap();
    let out = run_reveal_ok(tmp.path(), &["replay", "swipe.toml", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["open_row"], "b");
    let commands = value["steps"][2]["commands"].as_array().unwrap();
    assert_eq!(commands[0]["command"], "animate_to");
    assert_eq!(commands[0]["row"], "a");
    assert_eq!(commands[0]["duration"], 300);
    assert_eq!(commands[1]["command"], "apply_offset");
}

#[test]
fn test_replay_unknown_row_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bad.toml"),
        "[[events]]\nkind = \"release\"\nrow = \"ghost\"\n",
    )
    .unwrap();
    let (_, stderr, success) = run_reveal(tmp.path(), &["replay", "bad.toml"]);
    assert!(!success);
    assert!(stderr.contains("ghost"));
}
