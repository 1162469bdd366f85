//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory so
//! the user's real configuration is never touched.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_dinacharya"))
        .args(args)
        .env("HOME", home)
        .env_remove("DINACHARYA_ENV")
        .env_remove("DINACHARYA_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp HOME")
}

#[test]
fn test_quiz_questions_lists_ten() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["quiz", "questions", "--json"]);
    assert_eq!(code, 0, "quiz questions failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 10);
}

#[test]
fn test_quiz_score_json() {
    let home = home();
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["quiz", "score", "0,1,0,1,0,1,0,1,2,2", "--json"],
    );
    assert_eq!(code, 0, "quiz score failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["dominant"], "vata");
    assert_eq!(parsed["tally"]["vata"], 8);
    assert_eq!(parsed["tally"]["pitta"], 8);
    assert_eq!(parsed["is_complete"], true);
}

#[test]
fn test_quiz_score_partial_warns() {
    let home = home();
    let (stdout, stderr, code) = run_cli(home.path(), &["quiz", "score", "2,-,-,-,-,-,-,-,-,-"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Dominant constitution: Kapha"));
    assert!(stderr.contains("1/10"));
}

#[test]
fn test_quiz_score_rejects_bad_index() {
    let home = home();
    let (_, stderr, code) = run_cli(home.path(), &["quiz", "score", "0,0,0,0,0,0,0,0,0,5"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_plan_reference_day() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["plan", "vata", "--wake", "06:30", "--minutes", "240", "--json"],
    );
    assert_eq!(code, 0, "plan failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let slots = parsed["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 3 + 6 + 5 + 7);
    assert_eq!(slots[3]["start"], "07:55");
    assert_eq!(slots[14]["title"], "Lunch");
    assert_eq!(slots[14]["start"], "13:10");
}

#[test]
fn test_plan_uses_configured_defaults() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["plan", "kapha"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Day plan for Kapha (wake 05:30, 240 study min)"));
    assert!(stdout.contains("05:30-06:10  Morning Routine"));
}

fn write_config(home: &std::path::Path, content: &str) {
    let dir = home.join(".config").join("dinacharya");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_plan_truncation_warns_once() {
    let home = home();
    let (_, stderr, code) = run_cli(home.path(), &["plan", "vata", "--minutes", "500"]);
    assert_eq!(code, 0);
    assert_eq!(stderr.matches("study minutes did not fit").count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("100 study minutes"));
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
}

#[test]
fn test_plan_hours_convert_to_minutes() {
    let home = home();
    let (stdout, stderr, code) = run_cli(home.path(), &["plan", "pitta", "--hours", "1.5", "--json"]);
    assert_eq!(code, 0, "plan failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["study_minutes_requested"], 90);
    assert_eq!(parsed["study_minutes_scheduled"], 90);
}

#[test]
fn test_plan_clamps_to_max_study_hours() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["plan", "pitta", "--minutes", "900", "--policy", "continue", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["study_minutes_requested"], 720);
    assert_eq!(parsed["unscheduled_study_minutes"], 0);

    let (_, _, code) = run_cli(home.path(), &["config", "set", "planner.max_study_hours", "2"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(home.path(), &["plan", "vata", "--hours", "5", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["study_minutes_requested"], 120);
}

#[test]
fn test_plan_rejects_hours_with_minutes() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["plan", "vata", "--hours", "2", "--minutes", "60"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_plan_fails_on_broken_config() {
    let home = home();
    write_config(
        home.path(),
        "[planner]\noverflow_policy = \"reject\"\n\n[wake_times]\nvata = \"99:99\"\n",
    );
    let (stdout, stderr, code) = run_cli(home.path(), &["plan", "vata", "--minutes", "500"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("wake_times.vata"), "stderr: {stderr}");
}

#[test]
fn test_config_rejects_runaway_study_hours() {
    let home = home();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "planner.max_study_hours", "1e9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("planner.max_study_hours"));
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "planner.max_study_hours"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "12.0");
}

#[test]
fn test_plan_rejects_uppercase_constitution() {
    let home = home();
    let (_, _, code) = run_cli(home.path(), &["plan", "KAPHA"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(home.path(), &["plan", "vata", "--policy", "Continue"]);
    assert_eq!(code, 1);
}

#[test]
fn test_plan_reject_policy_fails() {
    let home = home();
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["plan", "vata", "--minutes", "500", "--policy", "reject"],
    );
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error:"));
}

#[test]
fn test_plan_rejects_invalid_input() {
    let home = home();
    let (_, _, code) = run_cli(home.path(), &["plan", "sattva"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(home.path(), &["plan", "pitta", "--wake", "7am"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_set_then_get() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "planner.overflow_policy"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "truncate");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "wake_times.pitta", "07:00"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(home.path(), &["plan", "pitta", "--minutes", "0"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("07:00-07:20  Morning Routine"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = home();
    let (_, _, code) = run_cli(home.path(), &["config", "get", "planner.nope"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(home.path(), &["config", "set", "wake_times.vata", "99:00"]);
    assert_eq!(code, 1);
}
