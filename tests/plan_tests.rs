//! End-to-end planning tests

use assert_cmd::Command;
use predicates::prelude::*;

fn recplan_bin() -> Command {
    let mut cmd = Command::cargo_bin("recplan").expect("binary builds");
    cmd.env("HOME", "/nonexistent");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

fn plan_json(args: &[&str]) -> serde_json::Value {
    let output = recplan_bin()
        .args(args)
        .arg("--json")
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn default_plan_is_a_balanced_meeting_configuration() {
    let plan = plan_json(&[]);
    let config = &plan["configuration"];
    assert_eq!(config["format"], "aac");
    assert_eq!(config["quality"], "high");
    assert_eq!(config["channels"], "mono");
    assert_eq!(config["sample_rate_hz"], 44_100);
    assert_eq!(config["noise_reduction"], true);
    assert!(plan["estimated_size_mb"].is_null());
    assert!(plan["constraint_met"].is_null());
    assert!(plan["advice"].as_str().unwrap().contains("meeting"));
}

#[test]
fn duration_alone_adds_an_estimate() {
    let plan = plan_json(&["--duration", "45m"]);
    // AAC at high: 1,200,000 bytes/min over 45 minutes
    assert_eq!(plan["estimated_size_mb"], 51.5);
    assert!(plan["constraint_met"].is_null());
}

#[test]
fn feasible_cap_is_satisfied() {
    let plan = plan_json(&["--type", "meeting", "--max-size-mb", "25", "--duration", "1h"]);
    assert_eq!(plan["constraint_met"], true);
    assert_eq!(plan["configuration"]["format"], "amr-wb");
    assert_eq!(plan["configuration"]["quality"], "high");
    assert!(plan["estimated_size_mb"].as_f64().unwrap() <= 25.0);
}

#[test]
fn infeasible_cap_degrades_to_the_smallest_configuration() {
    let plan = plan_json(&[
        "--type",
        "music",
        "--prioritize",
        "quality",
        "--max-size-mb",
        "1",
        "--duration",
        "1h",
    ]);
    assert_eq!(plan["constraint_met"], false);
    // Quality priority keeps the lossless codec; only the tier drops
    assert_eq!(plan["configuration"]["format"], "wav");
    assert_eq!(plan["configuration"]["quality"], "low");
}

#[test]
fn missed_cap_is_warned_about_in_text_mode() {
    recplan_bin()
        .args([
            "--type",
            "music",
            "--prioritize",
            "quality",
            "--max-size-mb",
            "1",
            "--duration",
            "1h",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("exceeds"));
}

#[test]
fn size_priority_picks_the_most_compressed_codec() {
    let plan = plan_json(&["--prioritize", "size"]);
    assert_eq!(plan["configuration"]["format"], "amr-wb");
    assert_eq!(plan["configuration"]["vbr"], false);
}

#[test]
fn quality_priority_for_music_is_lossless_ultra_stereo() {
    let plan = plan_json(&["--type", "music", "--prioritize", "quality"]);
    let config = &plan["configuration"];
    assert_eq!(config["format"], "wav");
    assert_eq!(config["quality"], "ultra");
    assert_eq!(config["channels"], "stereo");
    assert_eq!(config["sample_rate_hz"], 48_000);
    assert_eq!(config["noise_reduction"], false);
}

#[test]
fn unknown_type_plans_the_general_profile() {
    let plan = plan_json(&["--type", "podcast"]);
    assert!(plan["advice"].as_str().unwrap().contains("general"));
    assert_eq!(plan["configuration"]["channels"], "stereo");
}

#[test]
fn identical_inputs_produce_identical_output() {
    let args = [
        "--type",
        "interview",
        "--max-size-mb",
        "40",
        "--duration",
        "1h30m",
    ];
    let first = plan_json(&args);
    let second = plan_json(&args);
    assert_eq!(first, second);
}
