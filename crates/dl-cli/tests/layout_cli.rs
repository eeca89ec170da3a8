//! End-to-end tests for the `dl` binary.
//!
//! Each test runs against a fresh temp directory standing in for `HOME`, so no
//! user configuration leaks in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn dl_binary() -> String {
    env!("CARGO_BIN_EXE_dl").to_string()
}

fn dl(home: &Path) -> Command {
    let mut command = Command::new(dl_binary());
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    command
}

fn write_day(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "dl should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

const MORNING: &str = r#"{
    "date": "2025-01-15",
    "records": [
        {
            "id": "oats",
            "name": "Oats",
            "scheduling": {"mode": "fixed", "time_start": "08:00"},
            "kind": {"category": "meal", "meal_type": "breakfast", "calories": 300}
        },
        {
            "id": "fish-oil",
            "name": "Fish oil",
            "scheduling": {"mode": "relative", "anchor": "breakfast", "offset_minutes": 15},
            "kind": {"category": "supplement"}
        }
    ]
}"#;

fn layout_json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn start_of(day: &serde_json::Value, id: &str) -> u64 {
    day["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["id"] == id)
        .unwrap_or_else(|| panic!("{id} should be laid out"))["start_minutes"]
        .as_u64()
        .unwrap()
}

#[test]
fn test_layout_json_output() {
    let temp = TempDir::new().unwrap();
    let day = write_day(temp.path(), "day.json", MORNING);

    let output = dl(temp.path())
        .args(["layout", "--json"])
        .arg(&day)
        .output()
        .unwrap();
    let json = layout_json(&output);

    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["date"], "2025-01-15");
    assert_eq!(days[0]["lane_count"], 2);
    assert_eq!(start_of(&days[0], "supplement:relative:breakfast:+15"), 495);
}

#[test]
fn test_layout_text_output() {
    let temp = TempDir::new().unwrap();
    let day = write_day(temp.path(), "day.json", MORNING);

    let output = dl(temp.path()).arg("layout").arg(&day).output().unwrap();
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("2025-01-15  items: 2  lanes: 2"));
    assert!(stdout.contains("08:00-08:30  meal        Breakfast (Oats) [300 kcal]"));
    assert!(stdout.contains("08:15-08:45  supplement  Supplements (Fish oil)"));
}

#[test]
fn test_layout_multiple_days_keep_order() {
    let temp = TempDir::new().unwrap();
    let first = write_day(temp.path(), "a.json", MORNING);
    let second = write_day(
        temp.path(),
        "b.json",
        &MORNING.replace("2025-01-15", "2025-01-16"),
    );

    let output = dl(temp.path())
        .args(["layout", "--json"])
        .arg(&second)
        .arg(&first)
        .output()
        .unwrap();
    let json = layout_json(&output);

    let dates: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, ["2025-01-16", "2025-01-15"]);
}

#[test]
fn test_day_anchor_override_shifts_relative_item() {
    let temp = TempDir::new().unwrap();
    let with_anchor = MORNING.replacen(
        "\"records\"",
        "\"anchors\": {\"breakfast\": \"09:00\"},\n    \"records\"",
        1,
    );
    let day = write_day(temp.path(), "day.json", &with_anchor);

    let output = dl(temp.path())
        .args(["layout", "--json"])
        .arg(&day)
        .output()
        .unwrap();
    let json = layout_json(&output);

    assert_eq!(start_of(&json[0], "supplement:relative:breakfast:+15"), 555);
}

#[test]
fn test_config_file_anchor_override() {
    let temp = TempDir::new().unwrap();
    let day = write_day(temp.path(), "day.json", MORNING);
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[anchors]\nbreakfast = \"07:00\"\n").unwrap();

    let output = dl(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["layout", "--json"])
        .arg(&day)
        .output()
        .unwrap();
    let json = layout_json(&output);

    assert_eq!(start_of(&json[0], "supplement:relative:breakfast:+15"), 435);
}

#[test]
fn test_default_config_location_is_read() {
    let temp = TempDir::new().unwrap();
    let day = write_day(temp.path(), "day.json", MORNING);
    let config_dir = temp.path().join(".config/daylane");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "output = \"json\"\n").unwrap();

    let output = dl(temp.path()).arg("layout").arg(&day).output().unwrap();
    let json = layout_json(&output);

    assert_eq!(json[0]["lane_count"], 2);
}

#[test]
fn test_env_var_overrides_config() {
    let temp = TempDir::new().unwrap();
    let day = write_day(temp.path(), "day.json", MORNING);

    let output = dl(temp.path())
        .env("DL_ANCHORS__BREAKFAST", "10:00")
        .args(["layout", "--json"])
        .arg(&day)
        .output()
        .unwrap();
    let json = layout_json(&output);

    assert_eq!(start_of(&json[0], "supplement:relative:breakfast:+15"), 615);
}

#[test]
fn test_malformed_day_file_fails() {
    let temp = TempDir::new().unwrap();
    let day = write_day(
        temp.path(),
        "bad.json",
        r#"{"records": [{"id": "x", "name": "X", "scheduling": {"mode": "fixed", "time_start": "8:00"}, "kind": {"category": "lifestyle"}}]}"#,
    );

    let output = dl(temp.path()).arg("layout").arg(&day).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse day file"), "stderr: {stderr}");
}

#[test]
fn test_missing_day_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = dl(temp.path())
        .arg("layout")
        .arg(temp.path().join("nope.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_anchors_reflect_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[anchors]\nlunch = \"13:15\"\n").unwrap();

    let output = dl(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["anchors", "--json"])
        .output()
        .unwrap();
    let json = layout_json(&output);

    assert_eq!(json["lunch"], "13:15");
    assert_eq!(json["breakfast"], "08:00");
    assert_eq!(json.as_object().unwrap().len(), 9);

    let text = dl(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("anchors")
        .output()
        .unwrap();
    assert_success(&text);
    assert!(
        String::from_utf8_lossy(&text.stdout).contains("lunch         13:15  (configured)")
    );
}

#[test]
fn test_invalid_config_time_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[anchors]\nlunch = \"1:15\"\n").unwrap();

    let output = dl(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("anchors")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"), "stderr: {stderr}");
}
