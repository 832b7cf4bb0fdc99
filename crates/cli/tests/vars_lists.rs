use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CONFIG: &str = r#"
version = 1
vaults = ["Notes"]

[[templates]]
name = "article"
"#;

fn vars(cfg: &std::path::Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["vars", "--config", cfg.to_str().unwrap()]);
    cmd.args(args);
    cmd
}

#[test]
fn global_exclude_list_round_trip() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    vars(&cfg, &["add", "--exclude", "  author "]).assert().success().stdout("author\n");
    vars(&cfg, &["add", "--exclude", "site"]).assert().success().stdout("author\nsite\n");

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains("variable_exclude_list"));
    assert!(saved.contains("\"author\""));

    vars(&cfg, &["list", "--exclude"]).assert().success().stdout("author\nsite\n");
    vars(&cfg, &["remove", "--exclude", "author"]).assert().success().stdout("site\n");
    vars(&cfg, &["list"]).assert().success().stdout("");
}

#[test]
fn template_include_list_is_stored_on_the_template() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    vars(&cfg, &["add", "--template", "article", "title"]).assert().success().stdout("title\n");

    let saved = fs::read_to_string(&cfg).unwrap();
    let template_section = saved.split("[[templates]]").nth(1).unwrap();
    assert!(template_section.contains("variable_include_list"));

    vars(&cfg, &["list"]).assert().success().stdout("");
    vars(&cfg, &["list", "--template", "article"]).assert().success().stdout("title\n");
}

#[test]
fn blank_add_is_rejected() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    vars(&cfg, &["add", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nothing to add"));
}

#[test]
fn removing_missing_entry_fails() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    vars(&cfg, &["remove", "--exclude", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in the exclude list: ghost"));
}

#[test]
fn unknown_template_is_reported() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    vars(&cfg, &["list", "--template", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template not found: missing"));
}

#[test]
fn saving_keeps_the_log_path_as_written() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        "version = 1\n\n[logging]\nlevel = \"info\"\nfile = \"$VCLIP_TEST_LOGDIR/vclip.log\"\n",
    )
    .unwrap();

    vars(&cfg, &["add", "--exclude", "author"])
        .env("VCLIP_TEST_LOGDIR", tmp.path())
        .assert()
        .success()
        .stdout("author\n");

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains("$VCLIP_TEST_LOGDIR/vclip.log"), "{saved}");
    assert!(tmp.path().join("vclip.log").exists());
}
