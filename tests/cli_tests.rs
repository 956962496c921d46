use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn verinfo(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("verinfo").unwrap();
    cmd.env("VERINFO_CONFIG_DIR", config_dir)
        .env_remove("VERINFO_VERSION")
        .env_remove("VERINFO_LOG");
    cmd
}

fn write_config(dir: &std::path::Path, content: &str) {
    let path = dir.join("verinfo").join("config.toml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).expect("write config file");
}

#[test]
fn set_version_is_printed_exactly() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .args(["version", "--set-version", "v2.0.0"])
        .assert()
        .success()
        .stdout("v2.0.0\n");
}

#[test]
fn env_version_is_used_when_no_cli_override() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .env("VERINFO_VERSION", "v4.5.6")
        .arg("version")
        .assert()
        .success()
        .stdout("v4.5.6\n");
}

#[test]
fn cli_override_beats_env_and_config() {
    let td = tempdir().unwrap();
    write_config(td.path(), "version = \"v-from-config\"\n");
    verinfo(td.path())
        .env("VERINFO_VERSION", "v-from-env")
        .args(["version", "--set-version", "v-from-cli"])
        .assert()
        .success()
        .stdout("v-from-cli\n");
}

#[test]
fn config_file_version_is_used_last() {
    let td = tempdir().unwrap();
    write_config(td.path(), "version = \"v9.9.9\"\n");
    verinfo(td.path())
        .args(["version", "-n"])
        .assert()
        .success()
        .stdout("v9.9.9\n");
}

#[test]
fn invalid_config_file_fails() {
    let td = tempdir().unwrap();
    write_config(td.path(), "version = [not toml\n");
    verinfo(td.path())
        .arg("version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn default_command_ignores_configured_version() {
    let td = tempdir().unwrap();
    write_config(td.path(), "version = \"v9.9.9\"\n");
    verinfo(td.path())
        .env("VERINFO_VERSION", "v4.5.6")
        .arg("default")
        .assert()
        .success()
        .stdout(predicate::str::contains("v9.9.9").not())
        .stdout(predicate::str::contains("v4.5.6").not())
        .stdout(predicate::str::starts_with("v"));
}

#[test]
fn json_all_emits_one_object_with_five_keys() {
    let td = tempdir().unwrap();
    let assert = verinfo(td.path())
        .args(["default", "--all", "--json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(out.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let obj = v.as_object().expect("object");
    for key in ["Version", "Revision", "Time", "GoVersion", "Modified"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    let modified = obj["Modified"].as_str().unwrap();
    assert!(modified == "true" || modified == "false");
}

#[test]
fn json_without_field_flags_has_only_version() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .args(["version", "--set-version", "v2.0.0", "--json"])
        .assert()
        .success()
        .stdout("{\"Version\":\"v2.0.0\"}\n");
}

#[test]
fn toolchain_flag_reports_compiler_version() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .args(["default", "-g"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rustc "));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .args(["-vv", "version", "--set-version", "v2.0.0"])
        .assert()
        .success()
        .stdout("v2.0.0\n")
        .stderr(predicate::str::contains("using explicit version"));
}

#[test]
fn quiet_suppresses_logging() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .env("VERINFO_LOG", "trace")
        .args(["-q", "version", "--set-version", "v2.0.0"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_flag_is_rejected() {
    let td = tempdir().unwrap();
    verinfo(td.path())
        .args(["version", "--bogus"])
        .assert()
        .failure();
}

#[test]
fn long_and_short_forms_can_be_combined() {
    let td = tempdir().unwrap();
    let all = verinfo(td.path()).args(["default", "--all"]).output().unwrap();
    let both = verinfo(td.path())
        .args(["default", "-a", "--all", "-n", "--number"])
        .output()
        .unwrap();
    assert!(both.status.success());
    assert_eq!(both.stdout, all.stdout);
}
