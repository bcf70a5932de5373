use assert_cmd::Command;
use predicates::str::contains;
use std::path::{Path, PathBuf};

fn write_config(dir: &Path) -> PathBuf {
    let stats_file = dir.join("stats_data.json");
    let output_file = dir.join("docs/stats_graph.png");

    let config_path = dir.join("report_config.toml");
    let config_body = format!(
        "[report]\nstats_file = \"{}\"\noutput_file = \"{}\"\n\n[chart]\nimage_width = 640\nimage_height = 480\n",
        stats_file.display(),
        output_file.display()
    );
    std::fs::write(&config_path, config_body).unwrap();

    config_path
}

fn cmd(dir: &Path, config_path: &Path) -> Command {
    let mut command = Command::cargo_bin("repo_traffic_report").unwrap();
    command
        .current_dir(dir)
        .env("REPORT_CONFIG_PATH", config_path);
    command
}

#[test]
fn renders_graph_for_populated_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    std::fs::write(
        dir.path().join("stats_data.json"),
        serde_json::json!({
            "views": [
                {"timestamp": "2024-01-01T00:00:00Z", "count": 10},
                {"timestamp": "2024-01-02T00:00:00Z", "count": 25},
                {"timestamp": "2024-01-03T00:00:00Z", "count": 7}
            ],
            "clones": [
                {"timestamp": "2024-01-01T00:00:00Z", "count": 2},
                {"timestamp": "2024-01-03T00:00:00Z", "count": 4}
            ],
            "total_views": 12345,
            "total_clones": 6
        })
        .to_string(),
    )
    .unwrap();

    cmd(dir.path(), &config_path)
        .assert()
        .success()
        .stdout(contains("Graph saved to"));

    assert!(dir.path().join("docs/stats_graph.png").exists());
}

#[test]
fn skips_when_both_series_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    std::fs::write(
        dir.path().join("stats_data.json"),
        r#"{"views": [], "clones": [], "total_views": 0, "total_clones": 0}"#,
    )
    .unwrap();

    cmd(dir.path(), &config_path)
        .assert()
        .success()
        .stdout(contains("No data to plot"));

    assert!(!dir.path().join("docs/stats_graph.png").exists());
}

#[test]
fn renders_with_blank_clones_panel() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    std::fs::write(
        dir.path().join("stats_data.json"),
        r#"{"views": [{"timestamp": "2024-01-01T00:00:00Z", "count": 5}], "clones": [], "total_views": 5, "total_clones": 0}"#,
    )
    .unwrap();

    cmd(dir.path(), &config_path)
        .assert()
        .success()
        .stdout(contains("Graph saved to"));

    assert!(dir.path().join("docs/stats_graph.png").exists());
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    std::fs::write(
        dir.path().join("stats_data.json"),
        r#"{"views": [{"timestamp": "2024-01-01T00:00:00Z", "count": 5}], "clones": [], "total_views": 5, "total_clones": 0}"#,
    )
    .unwrap();

    cmd(dir.path(), &config_path).assert().success();
    cmd(dir.path(), &config_path).assert().success();

    assert!(dir.path().join("docs/stats_graph.png").exists());
}

#[test]
fn fails_when_stats_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    cmd(dir.path(), &config_path)
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn fails_on_malformed_stats_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    std::fs::write(dir.path().join("stats_data.json"), "{ not json").unwrap();

    cmd(dir.path(), &config_path)
        .assert()
        .failure()
        .stderr(contains("parse"));
}
