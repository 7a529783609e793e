//! Tests for log directory and configuration resolution.

use logsig_testing::TestWorld;
use logsig_testing::assertions::{assert_check_count, assert_escalated, assert_files};
use logsig_testing::fixtures::{NOISE, PORT_IN_USE, PORT_IN_USE_LINE};

#[test]
fn test_log_dir_from_config() {
    let world = TestWorld::new().without_log_dir_env();
    let toml = format!("log_dir = {:?}\n", world.log_dir().display().to_string());
    let world = world.with_config(&toml);
    world.write_log("syslog", &[PORT_IN_USE_LINE]).unwrap();

    let json = world.scan_json(&[]).expect("scan");
    assert_check_count(&json, PORT_IN_USE, 1).unwrap();
}

#[test]
fn test_environment_overrides_config_log_dir() {
    let world = TestWorld::new();
    let other = world.temp_dir().join("configured");
    std::fs::create_dir_all(&other).unwrap();
    std::fs::write(other.join("syslog"), format!("{}\n", NOISE[0])).unwrap();

    let toml = format!("log_dir = {:?}\n", other.display().to_string());
    let world = world.with_config(&toml);
    world.write_log("syslog", &[PORT_IN_USE_LINE]).unwrap();

    let json = world.scan_json(&[]).expect("scan");
    assert_check_count(&json, PORT_IN_USE, 1).unwrap();
    assert_eq!(
        json["content"]["log_dir"],
        world.log_dir().display().to_string()
    );
}

#[test]
fn test_path_flag_overrides_environment() {
    let world = TestWorld::new();
    world.write_log("syslog", &[NOISE[0]]).unwrap();

    let other = world.temp_dir().join("other");
    std::fs::create_dir_all(&other).unwrap();
    std::fs::write(other.join("syslog"), format!("{}\n", PORT_IN_USE_LINE)).unwrap();

    let json = world
        .scan_json(&["--path", other.to_str().unwrap()])
        .expect("scan");
    assert_check_count(&json, PORT_IN_USE, 1).unwrap();
}

#[test]
fn test_config_settings_apply_to_scan() {
    let world = TestWorld::new().with_config(
        r#"
order = "newest"
decompress = false
escalate_above = 3
"#,
    );
    world.write_gz_log("syslog.1.gz", &[PORT_IN_USE_LINE]).unwrap();
    world
        .write_log("syslog", &[PORT_IN_USE_LINE, PORT_IN_USE_LINE])
        .unwrap();

    let json = world.scan_json(&[]).expect("scan");

    assert_files(&json, &[("syslog", "scanned"), ("syslog.1.gz", "skipped")]).unwrap();
    assert_check_count(&json, PORT_IN_USE, 2).unwrap();
    assert_escalated(&json, &[]).unwrap();
}

#[test]
fn test_explicit_config_flag() {
    let world = TestWorld::new();
    let custom = world.temp_dir().join("custom.toml");
    std::fs::write(&custom, "escalate_above = 0\n").unwrap();
    world.write_log("syslog", &[PORT_IN_USE_LINE]).unwrap();

    let json = world
        .scan_json(&["--config", custom.to_str().unwrap()])
        .expect("scan");
    assert_escalated(&json, &[PORT_IN_USE]).unwrap();
}

#[test]
fn test_malformed_config_fails() {
    let world = TestWorld::new().with_config("escalate_above = \"lots\"\n");
    world.write_log("syslog", &[NOISE[0]]).unwrap();

    let result = world.run(&["scan"]).expect("run");
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("failed to load"));
}

#[test]
fn test_unknown_config_key_fails() {
    let world = TestWorld::new().with_config("log_directory = \"/tmp\"\n");
    world.write_log("syslog", &[NOISE[0]]).unwrap();

    let result = world.run(&["scan"]).expect("run");
    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
}
