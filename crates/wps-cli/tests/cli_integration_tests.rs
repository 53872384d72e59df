//! CLI integration tests
//!
//! Drive the built `wps` binary against a scratch database.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("options.db")
}

fn wps(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wps"))
        .env_remove("WPS_LOG_PROFILE")
        .env("WPS_DB", db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write_rules(temp_dir: &TempDir, json: &str) -> PathBuf {
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_snippet_put_list_show_delete() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = wps(
        &db,
        &["snippet", "put", "Sale Badge", "--html", "<b>Sale!</b><script>x()</script>"],
    );
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "Shortcode [sale-badge] is now active!");

    let output = wps(&db, &["snippet", "list"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "[sale-badge]\tSale!");

    let output = wps(&db, &["snippet", "show", "sale-badge"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "<b>Sale!</b>");

    let output = wps(&db, &["snippet", "delete", "sale-badge"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "Shortcode removed.");

    let output = wps(&db, &["snippet", "show", "sale-badge"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_snippet_put_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let html = temp_dir.path().join("notice.html");
    fs::write(&html, "<p class=\"note\">Ships free</p>\n").unwrap();

    let output = wps(&db, &["snippet", "put", "notice", "--file", html.to_str().unwrap()]);
    assert_success(&output);

    let output = wps(&db, &["snippet", "show", "notice"]);
    assert_eq!(stdout(&output).trim(), "<p class=\"note\">Ships free</p>");
}

#[test]
fn test_snippet_put_rejects_empty_markup() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = wps(&db, &["snippet", "put", "empty", "--html", "<script>x()</script>"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_rules_save_list_remove() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let rules = write_rules(
        &temp_dir,
        r#"[
            {"id": "r1", "shortcode": "sale-badge", "category": "shoes", "position": "after_title", "enabled": "1"},
            {"id": "r2", "shortcode": "notice", "category": "all", "position": "after_meta"}
        ]"#,
    );

    let output = wps(&db, &["rules", "save", rules.to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "Saved 2 rule(s).");

    let output = wps(&db, &["rules", "list"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "r1\tsale-badge\tshoes\tafter_title\tenabled\nr2\tnotice\tall\tafter_meta\tdisabled\n"
    );

    let output = wps(&db, &["rules", "remove", "R1"]);
    assert_success(&output);

    let output = wps(&db, &["rules", "list"]);
    assert_eq!(stdout(&output), "r2\tnotice\tall\tafter_meta\tdisabled\n");

    let output = wps(&db, &["rules", "remove", "r1"]);
    assert!(!output.status.success());
}

#[test]
fn test_positions_lists_reference_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = wps(&db_path(&temp_dir), &["positions"]);
    assert_success(&output);

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(
        lines[0],
        "after_price\twoocommerce_get_price_html\t10\tfilter\tDirectly After Price"
    );
}

#[test]
fn test_render_matching_product() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    assert_success(&wps(&db, &["snippet", "put", "sale-badge", "--html", "<b>Sale!</b>"]));
    let rules = write_rules(
        &temp_dir,
        r#"[
            {"id": "r1", "shortcode": "sale-badge", "category": "shoes", "position": "after_title", "enabled": "1"},
            {"id": "r2", "shortcode": "[sale-badge]", "category": "all", "position": "after_price", "enabled": "1"}
        ]"#,
    );
    assert_success(&wps(&db, &["rules", "save", rules.to_str().unwrap()]));

    let output = wps(
        &db,
        &["render", "--category", "shoes", "--price-html", "<span>$40</span>"],
    );
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        concat!(
            "woocommerce_get_price_html: <span>$40</span>",
            r#"<div class="wps-display wps-position-after_price wps-rule-r2"><b>Sale!</b></div>"#,
            "\n",
            "woocommerce_single_product_summary: ",
            r#"<div class="wps-display wps-position-after_title wps-rule-r1"><b>Sale!</b></div>"#,
            "\n"
        )
    );

    let output = wps(&db, &["render", "--category", "hats"]);
    assert_success(&output);
    assert!(!stdout(&output).contains("after_title"));

    let output = wps(&db, &["render", "--category", "shoes", "--listing"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_db_flag_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();
    let env_db = db_path(&temp_dir);
    let flag_db = temp_dir.path().join("flag.db");

    let output = Command::new(env!("CARGO_BIN_EXE_wps"))
        .env_remove("WPS_LOG_PROFILE")
        .env("WPS_DB", &env_db)
        .args(["--db", flag_db.to_str().unwrap()])
        .args(["snippet", "put", "x", "--html", "<i>x</i>"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(flag_db.exists());
    assert!(!env_db.exists());

    let conn = rusqlite::Connection::open(&flag_db).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM options", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
