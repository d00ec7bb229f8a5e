use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create an offline Command with --no-color for testing
fn crewplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crewplan").expect("Failed to find crewplan binary");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("CREWPLAN_MODEL")
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_questions_offline() {
    crewplan_cmd()
        .args(["questions", "--name", "Acme", "--mode", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Assessment for Acme"))
        .stdout(predicate::str::contains("How much time can you commit weekly?"));
}

#[test]
fn test_cli_questions_json() {
    let output = crewplan_cmd()
        .args(["questions", "--name", "Acme", "--mode", "solo", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let questions: serde_json::Value =
        serde_json::from_slice(&output).expect("questions output is JSON");
    let questions = questions.as_array().expect("questions are a list");
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["id"], "mock1");
}

#[test]
fn test_cli_questions_requires_mode() {
    crewplan_cmd()
        .args(["questions", "--name", "Acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode"));
}

#[test]
fn test_cli_project_new_prints_json() {
    let output = crewplan_cmd()
        .args([
            "project",
            "new",
            "--name",
            "Acme",
            "--description",
            "A dog-walking app",
            "--mode",
            "solo",
            "--tech-stack",
            "Rust",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let project: serde_json::Value = serde_json::from_slice(&output).expect("project is JSON");
    assert_eq!(project["name"], "Acme");
    assert_eq!(project["mode"], "SOLO");
    assert_eq!(project["techStack"], "Rust");
    assert_eq!(project["questions"].as_array().map(Vec::len), Some(3));
    assert!(project.get("plan").is_none());
}

#[test]
fn test_cli_project_new_rejects_blank_name() {
    crewplan_cmd()
        .args(["project", "new", "--name", "  ", "--mode", "team"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project"));
}

#[test]
fn test_cli_project_then_plan_workflow() {
    let temp_dir = create_cli_test_environment();
    let project_path = temp_dir.path().join("acme.json");
    let project_arg = project_path.to_str().unwrap();

    crewplan_cmd()
        .args([
            "project",
            "new",
            "--name",
            "Acme",
            "--description",
            "A dog-walking app",
            "--mode",
            "team",
            "--output",
            project_arg,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Created project 'Acme'"));

    crewplan_cmd()
        .args(["plan", project_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan for Acme"))
        .stdout(predicate::str::contains("No API key configured"))
        .stdout(predicate::str::contains("### Lead Developer"));

    let before = fs::read_to_string(&project_path).unwrap();
    assert!(!before.contains("\"plan\""));

    crewplan_cmd()
        .args(["plan", project_arg, "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Saved plan to"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&project_path).unwrap()).unwrap();
    assert_eq!(saved["plan"]["summary"], "Mock plan generated (No API Key).");
    assert_eq!(saved["plan"]["roles"][0]["isFilled"], false);
}

#[test]
fn test_cli_plan_json_output() {
    let temp_dir = create_cli_test_environment();
    let project_path = temp_dir.path().join("solo.json");
    fs::write(
        &project_path,
        r#"{"id": "p1", "name": "Solo", "description": "Idea", "mode": "SOLO",
            "createdAt": "2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();

    let output = crewplan_cmd()
        .args(["plan", project_path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).expect("plan is JSON");
    assert_eq!(plan["tasks"][0]["title"], "Setup Repo");
    assert_eq!(plan["tasks"][0]["status"], "todo");
}

#[test]
fn test_cli_plan_missing_file() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    crewplan_cmd()
        .args(["plan", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read project file"));
}

#[test]
fn test_cli_plan_invalid_project() {
    let temp_dir = create_cli_test_environment();
    let project_path = temp_dir.path().join("broken.json");
    fs::write(&project_path, r#"{"name": "No mode"}"#).unwrap();

    crewplan_cmd()
        .args(["plan", project_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse project file"));
}

#[test]
fn test_cli_rejects_bad_base_url() {
    crewplan_cmd()
        .args([
            "--api-key",
            "key",
            "--base-url",
            "ftp://example.com",
            "questions",
            "--name",
            "Acme",
            "--mode",
            "team",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize generator"));
}

/// Writes an offline TEAM project with the built-in questions and returns its path
fn write_team_project(temp_dir: &TempDir) -> String {
    let project_path = temp_dir.path().join("team.json");
    let project_arg = project_path.to_str().unwrap().to_string();

    crewplan_cmd()
        .args([
            "project", "new", "--name", "Acme", "--mode", "team", "--output", &project_arg,
        ])
        .assert()
        .success();

    project_arg
}

#[test]
fn test_cli_project_join_adds_member() {
    let temp_dir = create_cli_test_environment();
    let project_arg = write_team_project(&temp_dir);

    crewplan_cmd()
        .args([
            "project",
            "join",
            &project_arg,
            "--name",
            "Alice",
            "--skills",
            "Rust, Postgres",
            "--answer",
            "Expert (5+ yrs)",
            "--answer",
            "Full time",
            "--answer",
            "Mixed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added member 'Alice'"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&project_arg).unwrap()).unwrap();
    let member = &saved["members"][0];
    assert_eq!(member["name"], "Alice");
    assert_eq!(member["id"].as_str().map(str::len), Some(9));
    assert_eq!(member["answers"][1]["question"], "How much time can you commit weekly?");
    assert_eq!(member["answers"][1]["answer"], "Full time");
}

#[test]
fn test_cli_project_join_rejects_unknown_answer() {
    let temp_dir = create_cli_test_environment();
    let project_arg = write_team_project(&temp_dir);
    let before = fs::read_to_string(&project_arg).unwrap();

    crewplan_cmd()
        .args([
            "project", "join", &project_arg, "--name", "Bob", "--skills", "Design", "-a",
            "None", "-a", "Whenever", "-a", "Mixed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid member"))
        .stderr(predicate::str::contains("'Whenever' is not an option"));

    assert_eq!(fs::read_to_string(&project_arg).unwrap(), before);
}

#[test]
fn test_cli_project_fill_role_toggles() {
    let temp_dir = create_cli_test_environment();
    let project_arg = write_team_project(&temp_dir);

    crewplan_cmd()
        .args(["plan", &project_arg, "--write"])
        .assert()
        .success();

    crewplan_cmd()
        .args(["project", "fill-role", &project_arg, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Role 'Lead Developer' is now filled",
        ));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&project_arg).unwrap()).unwrap();
    assert_eq!(saved["plan"]["roles"][0]["isFilled"], true);

    crewplan_cmd()
        .args(["project", "fill-role", &project_arg, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now vacant"));
}

#[test]
fn test_cli_project_fill_role_requires_plan() {
    let temp_dir = create_cli_test_environment();
    let project_arg = write_team_project(&temp_dir);

    crewplan_cmd()
        .args(["project", "fill-role", &project_arg, "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no plan has been generated yet"));
}
