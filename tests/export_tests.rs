mod common;
use common::{init_db_with_data, rpc, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rpc()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id_pers,name,firstname,id_subject,subject,comment,month,load")
    );
    assert!(content.contains("Doe,John,1,Math,lead,2024-01,5"));
    assert!(content.contains("Smith,Jane,2,Physics,No comment,2024-02,20"));
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2024-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Doe");
    assert_eq!(rows[0]["month"], "2024-01");
    assert_eq!(rows[0]["load"], 5);
}

#[test]
fn test_export_json_team() {
    let db_path = setup_test_db("export_json_team");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_team", "json");

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--team", "1",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Doe"));
    assert!(!content.contains("Smith"));
}

#[test]
fn test_export_html_matrix_colors() {
    let db_path = setup_test_db("export_html_matrix");
    init_db_with_data(&db_path);

    let out = temp_out("export_html_matrix", "html");

    rpc()
        .args(["--db", &db_path, "export", "--format", "html", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("<th>2024-01</th>"));
    assert!(content.contains("<th>2024-02</th>"));
    // idle month of Smith, white on the default palette
    assert!(content.contains("background-color:#ffffff;color:#000000"));
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let db_path = setup_test_db("export_xlsx_pdf");
    init_db_with_data(&db_path);

    let xlsx = temp_out("export_xlsx_pdf", "xlsx");
    rpc()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("export_xlsx_pdf", "pdf");
    rpc()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_needs_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_needs_force", "csv");
    fs::write(&out, "keep me").expect("seed file");

    // no answer on stdin: cancelled
    rpc()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Doe"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_range", "csv");

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "2024-05:2024-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&db_path);

    let out = temp_out("backup_compressed", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    rpc()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(fs::metadata(&zip).is_ok());
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_reports_partial_palette_coverage() {
    let db_path = setup_test_db("export_partial_palette");
    init_db_with_data(&db_path);

    let home = std::env::temp_dir().join("export_partial_palette_home");
    let conf_dir = home.join(".rplancharge");
    fs::create_dir_all(&conf_dir).expect("create config dir");
    let palette = conf_dir.join("palette.json");
    fs::write(&palette, r##"{"0": "#FFFFFF", "20": "#FF0000"}"##).expect("write palette");
    fs::write(
        conf_dir.join("rplancharge.conf"),
        format!(
            "database: {db_path}\npalette: {}\nbind: 127.0.0.1:5001\nrequire_admin: false\nseparator_char: \"-\"\n",
            palette.display()
        ),
    )
    .expect("write config");

    let out = temp_out("export_partial_palette", "html");
    rpc()
        .env("HOME", &home)
        .args(["--db", &db_path, "export", "--format", "html", "--file", &out])
        .assert()
        .success()
        .stdout(contains("palette ends at 20, loads above are clamped"));

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("background-color:#ff0000"));
}
