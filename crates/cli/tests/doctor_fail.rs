use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL vclip doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_rejects_unsupported_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 2\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert().failure().stdout(predicate::str::contains("FAIL vclip doctor"));
}
