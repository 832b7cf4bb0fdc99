use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CONFIG: &str = r#"
version = 1
vaults = ["My Vault"]

[[templates]]
name = "journal"
behavior = "append-daily"

[[templates.properties]]
name = "source"
value = "web"

[[templates]]
name = "article"
path = "Clippings"
note_name = "{{title}}"
"#;

fn vclip(cfg: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.env("VCLIP_CLIPBOARD", "vclip-test-no-such-clipboard");
    cmd.env("VCLIP_OPENER", "vclip-test-no-such-opener");
    cmd.args(["send", "--config", cfg.to_str().unwrap()]);
    cmd
}

#[test]
fn daily_send_falls_back_to_inline_content_and_manual_open() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();
    let body = tmp.path().join("body.md");
    fs::write(&body, "hello").unwrap();

    let mut cmd = vclip(&cfg);
    cmd.args(["--template", "journal", "--body", body.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   vclip send"))
        .stdout(predicate::str::contains(
            "open: obsidian://daily?&append=true&vault=My%20Vault&content=",
        ))
        .stdout(predicate::str::contains("source%3A%20%22web%22"))
        .stdout(predicate::str::contains("behavior: append-daily"))
        .stdout(predicate::str::contains("content:  inline"))
        .stdout(predicate::str::contains("opened:   manual"));
}

#[test]
fn note_name_is_rendered_and_sanitized() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    let mut cmd = vclip(&cfg);
    cmd.args(["--template", "article", "--var", "title=What? Now: A/B"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "open: obsidian://new?file=Clippings%2FWhat%20Now%20AB&vault=My%20Vault&content=",
        ))
        .stdout(predicate::str::contains("behavior: create"));
}

#[test]
fn behavior_override_is_validated() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    let mut cmd = vclip(&cfg);
    cmd.args(["--template", "article", "--behavior", "sideways"]);
    cmd.assert().code(2);
}

#[test]
fn unknown_template_lists_available() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    let mut cmd = vclip(&cfg);
    cmd.args(["--template", "nope"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Template not found: nope"))
        .stderr(predicate::str::contains("  - journal"));
}
