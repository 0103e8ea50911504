mod common;
use common::{add_session, init_db_with_data, init_test_db, open_store, rta, setup_test_db, temp_out};

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtally::errors::AppError;
use rtally::models::backup::BackupDocument;
use rtally::models::session::Session;
use std::fs;

//
// ---- Library-level document tests ----
//

#[test]
fn test_backup_document_roundtrip_preserves_records() {
    let db_path = setup_test_db("doc_roundtrip_src");
    let store = open_store(&db_path);

    store
        .upsert(&Session::new("2025-03-01", "Club", "30/10", 4, 500))
        .expect("insert");
    store
        .upsert(&Session::new("2025-03-02", "Home", "20/10", 6, -150))
        .expect("insert");

    let doc = BackupDocument::capture(&store).expect("capture");
    let json = doc.to_json().expect("to_json");

    // Parse back and restore into a second, empty store
    let other_path = setup_test_db("doc_roundtrip_dst");
    let mut other = open_store(&other_path);

    let parsed = BackupDocument::parse(&json).expect("parse");
    parsed.restore_into(&mut other).expect("restore");

    let mut before = store.list_all().expect("list src");
    let mut after = other.list_all().expect("list dst");
    before.sort_by(|a, b| a.id.cmp(&b.id));
    after.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(before, after);
}

#[test]
fn test_backup_scenario_single_record_survives_clear_and_import() {
    let db_path = setup_test_db("doc_scenario");
    let mut store = open_store(&db_path);

    let original = Session {
        id: "a".to_string(),
        date: "2024-05-01".to_string(),
        location: "X".to_string(),
        stake: "30/10".to_string(),
        hands: 4,
        net: 500,
        created_at: "2024-05-01T20:00:00+02:00".to_string(),
        updated_at: "2024-05-01T20:00:00+02:00".to_string(),
    };
    store.upsert(&original).expect("insert");

    // Export, wipe, import
    let json = BackupDocument::capture(&store)
        .expect("capture")
        .to_json()
        .expect("to_json");

    store.replace_all(&[]).expect("clear");
    assert_eq!(store.count().expect("count"), 0);

    BackupDocument::parse(&json)
        .expect("parse")
        .restore_into(&mut store)
        .expect("restore");

    // The record must come back verbatim, timestamps included
    let restored = store.get("a").expect("get").expect("present");
    assert_eq!(restored, original);
}

#[test]
fn test_parse_rejects_invalid_json() {
    let err = BackupDocument::parse("{not json").unwrap_err();
    assert!(matches!(err, AppError::MalformedBackup(_)));
}

#[test]
fn test_parse_rejects_missing_records_field() {
    let err = BackupDocument::parse(r#"{"app": "rtally"}"#).unwrap_err();
    assert!(matches!(err, AppError::MalformedBackup(_)));
    assert!(err.to_string().contains("missing 'records'"));
}

#[test]
fn test_parse_rejects_records_not_an_array() {
    let err = BackupDocument::parse(r#"{"records": 42}"#).unwrap_err();
    assert!(matches!(err, AppError::MalformedBackup(_)));
    assert!(err.to_string().contains("not an array"));
}

#[test]
fn test_parse_rejects_bad_record_shape() {
    // records is an array, but the record misses mandatory fields
    let err = BackupDocument::parse(r#"{"records": [{"id": "a"}]}"#).unwrap_err();
    assert!(matches!(err, AppError::MalformedBackup(_)));
}

#[test]
fn test_parse_accepts_document_without_app_tag() {
    // The app tag is informational; a bare records array restores fine
    let doc = BackupDocument::parse(r#"{"records": []}"#).expect("parse");
    assert!(doc.records.is_empty());
    assert_eq!(doc.app, "");
}

//
// ---- CLI-level tests ----
//

#[test]
fn test_backup_writes_valid_json_document() {
    let db_path = setup_test_db("backup_writes_json");
    init_db_with_data(&db_path);

    let out = temp_out("backup_writes_json", "json");

    rta()
        .args(["--db", &db_path, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let content = fs::read_to_string(&out).expect("read backup");
    assert!(content.contains("\"app\": \"rtally\""));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));

    // Must be a well-formed document as far as the parser is concerned
    let doc = BackupDocument::parse(&content).expect("reparse own backup");
    assert_eq!(doc.records.len(), 2);
}

#[test]
fn test_backup_and_restore_roundtrip_between_databases() {
    let src_db = setup_test_db("roundtrip_src");
    init_db_with_data(&src_db);

    let out = temp_out("roundtrip_backup", "json");

    rta()
        .args(["--db", &src_db, "--test", "backup", "--file", &out])
        .assert()
        .success();

    // Fresh empty database
    let dst_db = setup_test_db("roundtrip_dst");
    init_test_db(&dst_db);

    rta()
        .args(["--db", &dst_db, "--test", "restore", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Restore completed"));

    rta()
        .args(["--db", &dst_db, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_restore_replaces_existing_sessions() {
    let src_db = setup_test_db("replace_src");
    init_db_with_data(&src_db);

    let out = temp_out("replace_backup", "json");

    rta()
        .args(["--db", &src_db, "--test", "backup", "--file", &out])
        .assert()
        .success();

    // Destination DB has its own session, which must disappear
    let dst_db = setup_test_db("replace_dst");
    init_test_db(&dst_db);
    add_session(&dst_db, "2020-01-01", "Old place", "10/5", "2", "50");

    rta()
        .args(["--db", &dst_db, "--test", "restore", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();

    rta()
        .args(["--db", &dst_db, "--test", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2020-01-01").not());
}

#[test]
fn test_restore_malformed_file_fails_and_keeps_store() {
    let db_path = setup_test_db("restore_malformed");
    init_db_with_data(&db_path);

    let bad = temp_out("restore_malformed", "json");
    fs::write(&bad, r#"{"app": "rtally", "records": "nope"}"#).expect("write bad file");

    rta()
        .args(["--db", &db_path, "--test", "restore", "--file", &bad])
        .assert()
        .failure()
        .stderr(contains("Malformed backup"));

    // Store untouched
    rta()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_restore_missing_file_fails() {
    let db_path = setup_test_db("restore_missing_file");
    init_test_db(&db_path);

    rta()
        .args([
            "--db",
            &db_path,
            "--test",
            "restore",
            "--file",
            "/tmp/definitely_not_there_rtally.json",
        ])
        .assert()
        .failure()
        .stderr(contains("Backup file not found"));
}

#[test]
fn test_restore_cancelled_by_user_keeps_store() {
    let src_db = setup_test_db("cancel_src");
    init_db_with_data(&src_db);

    let out = temp_out("cancel_backup", "json");

    rta()
        .args(["--db", &src_db, "--test", "backup", "--file", &out])
        .assert()
        .success();

    let dst_db = setup_test_db("cancel_dst");
    init_test_db(&dst_db);
    add_session(&dst_db, "2020-01-01", "Old place", "10/5", "2", "50");

    rta()
        .args(["--db", &dst_db, "--test", "restore", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Restore cancelled by user"));

    // Nothing replaced
    rta()
        .args(["--db", &dst_db, "--test", "list", "--period", "2020"])
        .assert()
        .success()
        .stdout(contains("2020-01-01"));
}

#[test]
fn test_backup_force_overwrites_existing_file() {
    let db_path = setup_test_db("backup_force");
    init_db_with_data(&db_path);

    let out = temp_out("backup_force", "json");
    fs::write(&out, "OLD_CONTENT").expect("create file");

    rta()
        .args([
            "--db", &db_path, "--test", "backup", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read backup");
    assert_ne!(content, "OLD_CONTENT");
    assert!(content.contains("\"records\""));
}

#[cfg(unix)]
#[test]
fn test_backup_compress_creates_tar_gz() {
    let db_path = setup_test_db("backup_compress");
    init_db_with_data(&db_path);

    let out = temp_out("backup_compress", "json");

    rta()
        .args([
            "--db", &db_path, "--test", "backup", "--file", &out, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let archive = format!(
        "{}.tar.gz",
        out.strip_suffix(".json").expect("json suffix")
    );
    assert!(std::path::Path::new(&archive).exists());
    // The plain copy is removed after compression
    assert!(!std::path::Path::new(&out).exists());
}
