use std::fs;

use tempfile::TempDir;

mod common;

use common::base_cmd;

fn stdout_of(data_dir: &TempDir, args: &[&str]) -> String {
    let output = base_cmd(data_dir.path())
        .args(args)
        .output()
        .expect("run quotesync");
    assert!(
        output.status.success(),
        "quotesync {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn e2e_first_run_seeds_defaults() {
    let data_dir = TempDir::new().expect("temp dir");
    let listed = stdout_of(&data_dir, &["list"]);
    assert_eq!(listed.lines().count(), 3);
    assert!(data_dir.path().join("quotes.json").exists());
}

#[test]
fn e2e_add_offline_then_filter_by_category() {
    let data_dir = TempDir::new().expect("temp dir");
    stdout_of(
        &data_dir,
        &["add", "--text", "Ship it", "--category", "Deploys", "--offline"],
    );

    let listed = stdout_of(&data_dir, &["list", "--category", "Deploys"]);
    assert_eq!(listed.lines().count(), 1);
    assert!(listed.contains("Ship it"));

    let categories = stdout_of(&data_dir, &["categories"]);
    assert!(categories.lines().any(|c| c == "Deploys"));
}

#[test]
fn e2e_export_import_round_trip() {
    let source = TempDir::new().expect("temp dir");
    let target = TempDir::new().expect("temp dir");
    let export_path = source.path().join("export.json");

    stdout_of(
        &source,
        &["export", "--out", export_path.to_str().unwrap()],
    );
    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported.as_array().unwrap().len(), 3);

    stdout_of(&target, &["import", export_path.to_str().unwrap()]);
    assert_eq!(stdout_of(&target, &["list"]).lines().count(), 6);
}

#[test]
fn e2e_malformed_import_fails_and_changes_nothing() {
    let data_dir = TempDir::new().expect("temp dir");
    let bad = data_dir.path().join("bad.json");
    fs::write(&bad, "{not json").unwrap();

    let before = stdout_of(&data_dir, &["list"]);
    let output = base_cmd(data_dir.path())
        .arg("import")
        .arg(&bad)
        .output()
        .expect("run import");
    assert!(!output.status.success());
    assert_eq!(stdout_of(&data_dir, &["list"]), before);
}

#[test]
fn e2e_selected_category_is_remembered() {
    let data_dir = TempDir::new().expect("temp dir");
    assert_eq!(stdout_of(&data_dir, &["category", "get"]).trim(), "all");
    stdout_of(&data_dir, &["category", "set", "Life"]);
    assert_eq!(stdout_of(&data_dir, &["category", "get"]).trim(), "Life");
}

#[test]
fn e2e_list_falls_back_to_remembered_category() {
    let data_dir = TempDir::new().expect("temp dir");
    stdout_of(&data_dir, &["category", "set", "Life"]);

    let listed = stdout_of(&data_dir, &["list"]);
    assert_eq!(listed.lines().count(), 1);
    assert!(listed.contains("[Life]"));

    let random = stdout_of(&data_dir, &["random"]);
    assert!(random.contains("[Life]"));

    let everything = stdout_of(&data_dir, &["list", "--category", "all"]);
    assert_eq!(everything.lines().count(), 3);
}
