//! Integration tests for the coordshift binary
//!
//! Each test runs the built binary in a temporary working directory with the
//! configuration environment cleared.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

const CONFIG_ENV: [&str; 8] = [
    "COORDSHIFT_FROM",
    "COORDSHIFT_TO",
    "COORDSHIFT_PRECISION",
    "COORDSHIFT_AMAP_KEY",
    "AMAP_KEY",
    "COORDSHIFT_AMAP_URL",
    "COORDSHIFT_REGEO_RADIUS",
    "RUST_LOG",
];

fn coordshift(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_coordshift"));
    command.current_dir(dir);
    for key in CONFIG_ENV {
        command.env_remove(key);
    }
    command
}

fn run(dir: &Path, args: &[&str]) -> Output {
    coordshift(dir).args(args).output().expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[test]
fn test_convert_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["convert", "116.3975", "39.9087", "--json"]);

    assert!(output.status.success());
    let parsed = stdout_json(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["from"], "wgs84");
    assert_eq!(parsed["data"]["to"], "gcj02");
    assert_eq!(parsed["data"]["shifted"], true);
    assert_close(&parsed["data"]["output"]["lng"], 116.40374357265176);
    assert_close(&parsed["data"]["output"]["lat"], 39.91010349934476);
}

#[test]
fn test_convert_human_precision() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--precision", "3", "convert", "116.3975", "39.9087"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "116.404,39.910");
}

#[test]
fn test_convert_inverse() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["convert", "116.40374357265176", "39.91010349934476", "--from", "gcj02", "--to", "wgs84"],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "116.397500,39.908699");
}

#[test]
fn test_convert_negative_longitude_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["convert", "-73.9857", "40.7484"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-73.985700,40.748400");
    assert!(String::from_utf8_lossy(&output.stderr).contains("outside China"));
}

#[test]
fn test_convert_rejects_baidu_frame() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["convert", "116.3975", "39.9087", "--to", "bd09"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("BD-09"));
}

#[test]
fn test_convert_rejects_swapped_axes() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["convert", "39.9087", "116.3975"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Latitude"));
}

#[test]
fn test_check() {
    let dir = tempfile::tempdir().unwrap();

    let inside = stdout_json(&run(dir.path(), &["check", "116.4", "39.9", "--json"]));
    assert_eq!(inside["data"]["out_of_china"], false);

    let outside = stdout_json(&run(dir.path(), &["check", "0", "0", "--json"]));
    assert_eq!(outside["data"]["out_of_china"], true);
}

#[test]
fn test_roundtrip_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["roundtrip", "121.4737", "31.2304", "--json"]);

    assert!(output.status.success());
    let data = &stdout_json(&output)["data"];
    assert!(data["error_lng"].as_f64().unwrap() <= 1e-4);
    assert!(data["error_lat"].as_f64().unwrap() <= 1e-4);
    assert!(data["error_meters"].as_f64().unwrap() < 10.0);
}

#[test]
fn test_batch_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("points.txt");
    std::fs::write(&input, "# lng,lat\n116.3975,39.9087\n\n2.3522,48.8566\n").unwrap();

    let output = run(dir.path(), &["batch", "points.txt", "--json"]);

    assert!(output.status.success());
    let data = &stdout_json(&output)["data"];
    assert_eq!(data["count"], 2);
    assert_eq!(data["points"][0]["line"], 2);
    assert_eq!(data["points"][1]["line"], 4);
    assert_close(&data["points"][1]["output"]["lng"], 2.3522);
}

#[test]
fn test_batch_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = coordshift(dir.path())
        .args(["batch", "-", "--precision", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(b"116.3975,39.9087\n-0.1276,51.5072\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["116.40,39.91", "-0.13,51.51"]);
}

#[test]
fn test_batch_reports_invalid_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("points.txt");
    std::fs::write(&input, "116.3975,39.9087\n116.3975\n").unwrap();

    let output = run(dir.path(), &["batch", "points.txt"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn test_batch_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["batch", "missing.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input file not found"));
}

#[test]
fn test_geojson_to_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("places.geojson"),
        r#"{
            "type": "FeatureCollection",
            "bbox": [116.0, 39.0, 117.0, 40.0],
            "features": [
                { "type": "Feature", "properties": { "name": "Tiananmen" },
                  "geometry": { "type": "Point", "coordinates": [116.3975, 39.9087, 44.0] } }
            ]
        }"#,
    )
    .unwrap();

    let output = run(
        dir.path(),
        &["geojson", "places.geojson", "--output", "places-gcj.geojson", "--json"],
    );

    assert!(output.status.success());
    let summary = &stdout_json(&output)["data"]["summary"];
    assert_eq!(summary["coordinates"], 1);
    assert_eq!(summary["shifted"], 1);

    let written = std::fs::read_to_string(dir.path().join("places-gcj.geojson")).unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();
    assert!(document.get("bbox").is_none());
    let coordinates = &document["features"][0]["geometry"]["coordinates"];
    assert_close(&coordinates[0], 116.40374357265176);
    assert_close(&coordinates[1], 39.91010349934476);
    assert_eq!(coordinates[2], 44.0);
    assert_eq!(document["features"][0]["properties"]["name"], "Tiananmen");
}

#[test]
fn test_geojson_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("line.geojson"),
        r#"{ "type": "LineString", "coordinates": [[121.4737, 31.2304], [139.6917, 35.6895]] }"#,
    )
    .unwrap();

    let output = run(dir.path(), &["geojson", "line.geojson"]);

    assert!(output.status.success());
    let document = stdout_json(&output);
    assert_close(&document["coordinates"][0][0], 121.47822305927693);
    assert_close(&document["coordinates"][1][0], 139.6917);
}

#[test]
fn test_geojson_to_stdout_json_envelope() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("line.geojson"),
        r#"{ "type": "LineString", "coordinates": [[121.4737, 31.2304], [139.6917, 35.6895]] }"#,
    )
    .unwrap();

    let output = run(dir.path(), &["geojson", "line.geojson", "--json"]);

    assert!(output.status.success());
    let parsed = stdout_json(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["type"], "LineString");
    assert_close(&parsed["data"]["coordinates"][0][0], 121.47822305927693);
    assert_close(&parsed["data"]["coordinates"][1][0], 139.6917);
}

#[test]
fn test_config_sources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("coordshift.toml"), "default_to = \"wgs84\"\n").unwrap();

    let output = coordshift(dir.path())
        .args(["config", "--json"])
        .env("COORDSHIFT_PRECISION", "3")
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows = stdout_json(&output)["data"].as_array().unwrap().clone();
    let row = |key: &str| rows.iter().find(|r| r["key"] == key).unwrap().clone();

    assert_eq!(row("default_from")["source"], "Default");
    assert_eq!(row("default_to")["value"], "wgs84");
    assert_eq!(row("default_to")["source"], "File");
    assert_eq!(row("precision")["value"], "3");
    assert_eq!(row("precision")["source"], "Environment");
    assert_eq!(row("amap_key")["value"], "(not set)");
}

#[test]
fn test_explicit_config_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--config", "nope.toml", "config"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.toml"));
}

#[test]
fn test_regeo_without_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["regeo", "116.3975", "39.9087"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("AMap key not configured"));
}
