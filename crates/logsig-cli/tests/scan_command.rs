//! End-to-end tests for `logsig scan`.

use assert_cmd::cargo::cargo_bin_cmd;
use logsig_testing::TestWorld;
use logsig_testing::assertions::{
    assert_check_count, assert_check_example, assert_escalated, assert_files,
    assert_total_matches,
};
use logsig_testing::fixtures::{
    self, BROKER_TIMEOUT, BROKER_TIMEOUT_LINE, GPS_TEMPLATE, NEAR_MISS, NOISE,
    PERSPECTIVE_CONFIG, PORT_IN_USE, PORT_IN_USE_LINE,
};
use predicates::prelude::*;

#[test]
fn test_single_match_is_reported_but_not_escalated() {
    let world = TestWorld::new();
    world
        .write_log("syslog", &[PORT_IN_USE_LINE])
        .expect("write syslog");

    let json = world.scan_json(&[]).expect("scan");

    assert_check_count(&json, PORT_IN_USE, 1).unwrap();
    assert_check_example(&json, PORT_IN_USE, Some(PORT_IN_USE_LINE)).unwrap();
    assert_check_count(&json, PERSPECTIVE_CONFIG, 0).unwrap();
    assert_check_example(&json, PERSPECTIVE_CONFIG, None).unwrap();
    assert_total_matches(&json, 1).unwrap();
    assert_escalated(&json, &[]).unwrap();
}

#[test]
fn test_plain_report_lists_counts_and_examples() {
    let world = TestWorld::new();
    world
        .write_log("syslog", &[NOISE[0], PORT_IN_USE_LINE])
        .expect("write syslog");

    let mut cmd = cargo_bin_cmd!("logsig");
    world.configure_command(&mut cmd).arg("scan");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Log files (1):"))
        .stdout(predicate::str::contains(format!(
            "Total matches for pattern: {}\nMatches found: 1\nExample match: {}",
            PORT_IN_USE, PORT_IN_USE_LINE
        )))
        .stdout(predicate::str::contains(format!(
            "Total matches for pattern: {}\nMatches found: 0\n",
            NEAR_MISS
        )))
        .stdout(predicate::str::contains("Total matches across all files: 1"))
        .stdout(predicate::str::contains(format!("Error: {}", PORT_IN_USE)).not());
}

#[test]
fn test_scan_is_the_default_command() {
    let world = TestWorld::new();
    world
        .write_log("syslog", &[BROKER_TIMEOUT_LINE])
        .expect("write syslog");

    let result = world.run(&["--format", "json"]).expect("run");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("json");
    assert_check_count(&json, BROKER_TIMEOUT, 1).unwrap();
}

#[test]
fn test_missing_logs_exit_with_error() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("logsig");
    world.configure_command(&mut cmd).arg("scan");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no log files found"));
}

#[test]
fn test_nonexistent_directory_exits_with_error() {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nowhere");

    let result = world
        .run(&["--path", missing.to_str().unwrap(), "scan"])
        .expect("run");

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("no log files found"));
}

#[test]
fn test_matches_accumulate_oldest_file_first() {
    let world = TestWorld::new();
    let first = fixtures::port_in_use_line(10);
    let second = fixtures::port_in_use_line(20);
    let third = fixtures::port_in_use_line(30);

    world
        .write_gz_log("syslog.2.gz", &[first.as_str(), NOISE[1]])
        .expect("write syslog.2.gz");
    world
        .write_log("syslog.1", &[second.as_str()])
        .expect("write syslog.1");
    world
        .write_log("syslog", &[third.as_str(), PORT_IN_USE_LINE])
        .expect("write syslog");

    let json = world.scan_json(&[]).expect("scan");

    assert_files(
        &json,
        &[
            ("syslog.2.gz", "scanned"),
            ("syslog.1", "scanned"),
            ("syslog", "scanned"),
        ],
    )
    .unwrap();
    assert_check_count(&json, PORT_IN_USE, 4).unwrap();
    assert_check_example(&json, PORT_IN_USE, Some(first.as_str())).unwrap();
    assert_escalated(&json, &[PORT_IN_USE]).unwrap();
}

#[test]
fn test_newest_order_takes_example_from_current_log() {
    let world = TestWorld::new();
    let old = fixtures::port_in_use_line(5);
    let new = fixtures::port_in_use_line(45);

    world.write_log("syslog.1", &[old.as_str()]).unwrap();
    world.write_log("syslog", &[new.as_str()]).unwrap();

    let json = world.scan_json(&[]).expect("scan");
    assert_check_example(&json, PORT_IN_USE, Some(old.as_str())).unwrap();

    let result = world
        .run(&["--order", "newest", "--format", "json", "scan"])
        .expect("run");
    let json = result.json().expect("json");
    assert_check_example(&json, PORT_IN_USE, Some(new.as_str())).unwrap();
}

#[test]
fn test_plain_report_names_escalated_signatures() {
    let world = TestWorld::new();
    world
        .write_log("syslog", &[PORT_IN_USE_LINE, PORT_IN_USE_LINE, NOISE[2]])
        .unwrap();

    let mut cmd = cargo_bin_cmd!("logsig");
    world.configure_command(&mut cmd).arg("scan");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("Error: {}", PORT_IN_USE)))
        .stdout(predicate::str::contains(format!(
            "Error messages across all files:\n{}",
            PORT_IN_USE
        )));
}

#[test]
fn test_escalate_above_flag_raises_threshold() {
    let world = TestWorld::new();
    world
        .write_log("syslog", &[PORT_IN_USE_LINE, PORT_IN_USE_LINE])
        .unwrap();

    let json = world.scan_json(&["--escalate-above", "2"]).expect("scan");
    assert_check_count(&json, PORT_IN_USE, 2).unwrap();
    assert_escalated(&json, &[]).unwrap();
    assert_eq!(json["content"]["escalate_above"], 2);

    let json = world.scan_json(&["--escalate-above", "0"]).expect("scan");
    assert_escalated(&json, &[PORT_IN_USE]).unwrap();
}

#[test]
fn test_no_decompress_skips_compressed_rotations() {
    let world = TestWorld::new();
    world
        .write_gz_log("syslog.1.gz", &[PORT_IN_USE_LINE])
        .unwrap();
    world.write_log("syslog", &[NOISE[0]]).unwrap();

    let result = world
        .run(&["scan", "--format", "json", "--no-decompress"])
        .expect("run");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("json");
    assert_files(&json, &[("syslog.1.gz", "skipped"), ("syslog", "scanned")]).unwrap();
    assert_total_matches(&json, 0).unwrap();
    assert!(!json["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_corrupt_rotation_does_not_abort_scan() {
    let world = TestWorld::new();
    std::fs::write(world.log_dir().join("syslog.1.gz"), b"definitely not gzip").unwrap();
    world.write_log("syslog", &[PORT_IN_USE_LINE]).unwrap();

    let json = world.scan_json(&[]).expect("scan");

    assert_files(&json, &[("syslog.1.gz", "failed"), ("syslog", "scanned")]).unwrap();
    assert_check_count(&json, PORT_IN_USE, 1).unwrap();

    let failed = &json["content"]["files"][0];
    assert!(
        failed["detail"]
            .as_str()
            .unwrap()
            .contains("error reading")
    );
}

#[test]
fn test_all_builtin_signatures_detected() {
    let world = TestWorld::new();
    world
        .write_log(
            "syslog",
            &[
                fixtures::PORT_IN_USE_LINE,
                fixtures::PERSPECTIVE_CONFIG_LINE,
                fixtures::NEAR_MISS_LINE,
                fixtures::GPS_TEMPLATE_LINE,
                fixtures::BROKER_TIMEOUT_LINE,
            ],
        )
        .unwrap();

    let json = world.scan_json(&[]).expect("scan");

    for description in [
        PORT_IN_USE,
        PERSPECTIVE_CONFIG,
        NEAR_MISS,
        GPS_TEMPLATE,
        BROKER_TIMEOUT,
    ] {
        assert_check_count(&json, description, 1).unwrap();
    }
    assert_total_matches(&json, 5).unwrap();
}

#[test]
fn test_unrelated_files_are_ignored() {
    let world = TestWorld::new();
    world.write_log("syslog", &[NOISE[0]]).unwrap();
    world.write_log("kern.log", &[PORT_IN_USE_LINE]).unwrap();
    world.write_log("syslog.10", &[PORT_IN_USE_LINE]).unwrap();
    world.write_log("syslog.1.bak", &[PORT_IN_USE_LINE]).unwrap();

    let json = world.scan_json(&[]).expect("scan");

    assert_files(&json, &[("syslog", "scanned")]).unwrap();
    assert_total_matches(&json, 0).unwrap();
}
