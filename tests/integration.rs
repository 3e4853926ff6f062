use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_paramdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Copy a fixture into a scratch directory so `--fix` can rewrite it.
fn scratch_copy(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, fixture(name)).unwrap();
    path
}

fn tag_names(doc: &Value, function: usize) -> Vec<String> {
    doc["functions"][function]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

// -- stdin mode --

#[test]
fn stdin_mode_reports_missing_entries() {
    let assert = cmd()
        .write_stdin(fixture("missing.json"))
        .assert()
        .failure();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected = "\
<stdin>:3: quux: Missing @param \"root0\" declaration. [fixable]
<stdin>:3: quux: Missing @param \"root0.bar\" declaration.
<stdin>:3: quux: Missing @param \"root0.baz\" declaration.
<stdin>:12: placeholder: Missing @param \"root0\" declaration. [fixable]
<stdin>:12: placeholder: Missing @param \"root0.x\" declaration.

5 problems in 2 functions
";
    assert_eq!(output, expected);
}

#[test]
fn stdin_mode_clean_input_succeeds_silently() {
    cmd()
        .write_stdin(fixture("clean.json"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn stdin_mode_fix_prints_fixed_document() {
    let assert = cmd()
        .arg("--fix")
        .write_stdin(fixture("missing.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("5 problems in 2 functions, 5 fixed"));
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        tag_names(&doc, 0),
        ["foo", "root0", "root0.bar", "root0.baz", ""]
    );
    assert_eq!(doc["functions"][0]["tags"][4]["tag"], "returns");
    // Existing entries keep their details.
    assert_eq!(doc["functions"][0]["tags"][0]["description"], "The name");
    assert_eq!(tag_names(&doc, 1), ["root0", "a", "root0.x"]);
    assert_eq!(doc["functions"][3]["skip"], true);
}

#[test]
fn fixed_output_is_clean() {
    let assert = cmd()
        .arg("--fix")
        .write_stdin(fixture("missing.json"))
        .assert()
        .success();
    let fixed = assert.get_output().stdout.clone();

    cmd().write_stdin(fixed).assert().success().stdout("");
}

#[test]
fn fixing_blank_slots_of_unnamed_aggregates_is_stable() {
    let input = r#"{"functions": [{
        "name": "f",
        "params": [{"children": ["x"]}, {"children": ["y"]}],
        "tags": [{"tag": "param"}, {"tag": "param"}]
    }]}"#;
    let assert = cmd().arg("--fix").write_stdin(input).assert().success();
    let fixed = assert.get_output().stdout.clone();
    let doc: Value = serde_json::from_slice(&fixed).unwrap();
    assert_eq!(tag_names(&doc, 0), ["root0", "", "root0.x", "root1", "root1.y"]);

    cmd().write_stdin(fixed).assert().success().stdout("");
}

#[test]
fn json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("missing.json"))
        .assert()
        .failure();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: Value = serde_json::from_str(&output).unwrap();
    let functions = report.as_array().unwrap();
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0]["function"], "quux");
    assert_eq!(functions[0]["diagnostics"][0]["name"], "root0");
    assert_eq!(functions[0]["diagnostics"][0]["fixable"], true);
    assert_eq!(functions[1]["line"], 12);
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin(fixture("clean.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: xml"));
}

#[test]
fn malformed_input_fails() {
    cmd()
        .write_stdin(r#"{"functions": [{"name": "f", "params": 3}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input document in <stdin>"));
}

#[test]
fn misspelt_aggregate_key_fails() {
    cmd()
        .write_stdin(r#"{"functions": [{"name": "f", "params": [{"name": "opts", "children": []}]}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input document in <stdin>"));
}

// -- configuration --

#[test]
fn config_sets_tag_label_and_generated_names() {
    let input = r#"{"functions": [{"name": "f", "params": [{"children": ["x"]}]}]}"#;
    cmd()
        .args(["-c", &fixture_path("config.json")])
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#"<stdin>: f: Missing @arg "options1" declaration. [fixable]"#,
        ))
        .stdout(predicate::str::contains(
            r#"<stdin>: f: Missing @arg "options1.x" declaration."#,
        ));
}

#[test]
fn disabled_fixer_is_not_offered() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rules.json");
    std::fs::write(&config, r#"{"options": {"enableFixer": false}}"#).unwrap();

    let assert = cmd()
        .arg("--fix")
        .args(["-c", config.to_str().unwrap()])
        .write_stdin(fixture("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("[fixable]").not());
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(tag_names(&doc, 0), ["foo", ""]);
}

#[test]
fn invalid_config_is_rejected() {
    cmd()
        .args(["-c", &fixture_path("invalid-config.json")])
        .write_stdin(fixture("clean.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn missing_config_is_rejected() {
    cmd()
        .args(["-c", "/nonexistent/rules.json"])
        .write_stdin(fixture("clean.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/rules.json"));
}

// -- file mode --

#[test]
fn file_mode_reports_with_paths() {
    let path = fixture_path("missing.json");
    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(format!(
            "{}:12: placeholder: Missing @param \"root0.x\" declaration.",
            path
        )));
}

#[test]
fn file_mode_fix_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = scratch_copy(&dir, "missing.json");

    cmd()
        .arg("--fix")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(fixed)"));

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        tag_names(&doc, 0),
        ["foo", "root0", "root0.bar", "root0.baz", ""]
    );

    // A second run has nothing left to report.
    cmd().arg(&path).assert().success().stdout("");
}

#[test]
fn file_mode_leaves_clean_files_untouched() {
    let dir = TempDir::new().unwrap();
    let path = scratch_copy(&dir, "clean.json");

    cmd().arg("--fix").arg(&path).assert().success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), fixture("clean.json"));
}

#[test]
fn file_mode_scans_directories_and_globs() {
    let dir = TempDir::new().unwrap();
    scratch_copy(&dir, "missing.json");
    scratch_copy(&dir, "clean.json");
    std::fs::write(dir.path().join("notes.txt"), "not json").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("5 problems in 2 functions"));

    let pattern = format!("{}/*.json", dir.path().display());
    cmd()
        .arg(&pattern)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing.json:3: quux"));
}

#[test]
fn file_mode_skips_unreadable_documents() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let clean = scratch_copy(&dir, "clean.json");

    cmd()
        .arg(&broken)
        .arg(&clean)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
}
