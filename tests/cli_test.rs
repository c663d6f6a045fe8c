use std::process::Command;
use tempfile::TempDir;

/// Run the binary inside a fresh directory so no settings file leaks in.
fn calc(dir: &TempDir, args: &[&str]) -> std::process::Output {
    calc_with_env(dir, args, &[])
}

fn calc_with_env(dir: &TempDir, args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_calc"));
    command
        .args(args)
        .current_dir(dir.path())
        .env_remove("CALC_OUTPUT__FORMAT")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to run calc")
}

#[test]
fn test_calculate_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "addition", "5", "3"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "5 + 3 = 8");
}

#[test]
fn test_division_by_zero_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "/", "6", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        "6 / 0: Error: Division by zero"
    );
}

#[test]
fn test_unknown_operation_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "modulo", "7", "2"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Error: Unsupported operation modulo"));
}

#[test]
fn test_calculate_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "*", "-2.5", "4", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["operation"], "multiplication");
    assert_eq!(json["data"]["result"], -10.0);
}

#[test]
fn test_demo_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["demo"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("5 + 3 = 8"));
    assert!(stdout.contains("6 / 3 = 2"));
    assert!(stdout.contains("6 / 0: Error: Division by zero"));
}

#[test]
fn test_init_then_config() {
    let temp_dir = TempDir::new().unwrap();

    let output = calc(&temp_dir, &["init"]);
    assert!(output.status.success());

    let config_path = temp_dir.path().join(".calculator/settings.toml");
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[output]"));

    // A second init without --force refuses to overwrite
    let output = calc(&temp_dir, &["init"]);
    assert_eq!(output.status.code(), Some(2));

    std::fs::write(&config_path, "version = 3\n[output]\nformat = \"json\"\n").unwrap();
    let output = calc(&temp_dir, &["config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 3"));
    assert!(stdout.contains("format = \"json\""));
}

#[test]
fn test_settings_file_selects_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

    let output = calc(
        &temp_dir,
        &["--config", config_path.to_str().unwrap(), "calculate", "+", "1", "2"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["result"], 3.0);
}

#[test]
fn test_demo_json_exit_code_matches_process() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["demo", "--json"]);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "partial_success");
    assert_eq!(json["code"], "DIVISION_BY_ZERO");
    assert_eq!(
        json["exit_code"].as_i64(),
        output.status.code().map(i64::from)
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_calculate_json_exit_code_matches_process() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "/", "6", "0", "--json"]);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["code"], "DIVISION_BY_ZERO");
    assert_eq!(json["exit_code"], 1);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_bad_config_with_json_prints_error_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

    let output = calc(
        &temp_dir,
        &["-c", config_path.to_str().unwrap(), "calculate", "+", "1", "2", "--json"],
    );

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "CONFIG_ERROR");
    assert_eq!(json["exit_code"], 2);
    assert!(json["data"].is_null());
    assert!(json["message"].as_str().unwrap().contains("Configuration error"));
}

#[test]
fn test_bad_config_text_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

    let output = calc(
        &temp_dir,
        &["-c", config_path.to_str().unwrap(), "calculate", "+", "1", "2"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_debug_logs_stay_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc_with_env(
        &temp_dir,
        &["calculate", "+", "5", "3"],
        &[("RUST_LOG", "debug")],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "5 + 3 = 8\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[calculator] dispatched"), "stderr was: {stderr}");
}

#[test]
fn test_default_level_hides_debug_logs() {
    let temp_dir = TempDir::new().unwrap();
    let output = calc(&temp_dir, &["calculate", "+", "5", "3"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("[calculator] dispatched"));
}
