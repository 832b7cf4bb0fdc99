use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CONFIG: &str = r#"
version = 1
vaults = ["Notes"]

[[property_types]]
name = "tags"
type = "multitext"

[[property_types]]
name = "rating"
type = "number"

[[templates]]
name = "article"
path = "Clippings"

[[templates.properties]]
name = "title"
value = "{{title}}"

[[templates.properties]]
name = "tags"
value = "clippings, reading"

[[templates.properties]]
name = "rating"
value = "4.50 stars"
"#;

#[test]
fn frontmatter_from_properties_file() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();
    let props = tmp.path().join("props.json");
    fs::write(
        &props,
        r#"[
  {"name": "title", "value": "Say \"hi\"", "type": "text"},
  {"name": "tags", "value": "[\"a\",\"b\"]", "type": "multitext"},
  {"name": "read", "value": true, "type": "checkbox"},
  {"name": "1st", "value": "", "type": "text"}
]"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["frontmatter", "--config", cfg.to_str().unwrap()]);
    cmd.args(["--properties", props.to_str().unwrap()]);
    cmd.assert().success().stdout(
        "---\ntitle: \"Say \\\"hi\\\"\"\ntags:\n  - \"a\"\n  - \"b\"\nread: true\n\"1st\":\n---\n",
    );
}

#[test]
fn frontmatter_from_template_renders_typed_values() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["frontmatter", "--config", cfg.to_str().unwrap(), "--template", "article"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("title: \"{{title}}\"\n"))
        .stdout(predicate::str::contains("tags:\n  - \"clippings\"\n  - \"reading\"\n"))
        .stdout(predicate::str::contains("rating: 4.5\n"));
}

#[test]
fn auto_metadata_expands_captured_variables() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();
    let props = tmp.path().join("props.yaml");
    fs::write(
        &props,
        r#"
- name: meta
  value: ""
  type: auto-metadata
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["frontmatter", "--config", cfg.to_str().unwrap()]);
    cmd.args(["--properties", props.to_str().unwrap()]);
    cmd.args(["--var", "title=Hello", "--var", "content=long body", "--var", "author=Ada"]);
    cmd.assert()
        .success()
        .stdout("---\ntitle: \"Hello\"\nauthor: \"Ada\"\n---\n");
}

#[test]
fn frontmatter_fails_for_unknown_template() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, CONFIG).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vclip"));
    cmd.args(["frontmatter", "--config", cfg.to_str().unwrap(), "--template", "missing"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Template not found: missing"))
        .stderr(predicate::str::contains("  - article"));
}
