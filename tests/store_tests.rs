mod common;
use common::{open_store, setup_test_db};

use rtally::db::store::SessionStore;
use rtally::errors::AppError;
use rtally::models::session::Session;

/// Sort by id so two listings can be compared as sets.
fn sorted_by_id(mut sessions: Vec<Session>) -> Vec<Session> {
    sessions.sort_by(|a, b| a.id.cmp(&b.id));
    sessions
}

fn sample(id: &str, date: &str, net: i64) -> Session {
    Session {
        id: id.to_string(),
        date: date.to_string(),
        location: "Club".to_string(),
        stake: "30/10".to_string(),
        hands: 4,
        net,
        created_at: "2025-01-10T21:00:00+01:00".to_string(),
        updated_at: "2025-01-10T21:00:00+01:00".to_string(),
    }
}

#[test]
fn test_open_sets_schema_version() {
    let db_path = setup_test_db("schema_version");
    let store = open_store(&db_path);

    let version: i32 = store
        .conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("read user_version");

    assert_eq!(version, 1);

    // Reopening an already-migrated DB must not fail nor touch data
    drop(store);
    let store = open_store(&db_path);
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn test_open_unreachable_path_reports_storage_unavailable() {
    let err = SessionStore::open("/no/such/dir/rtally.sqlite").unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn test_open_corrupt_file_reports_storage_unavailable() {
    let db_path = setup_test_db("corrupt_file");
    std::fs::write(&db_path, "definitely not a sqlite database").expect("write garbage");

    // SQLite only notices the corruption at the first statement; the
    // store must still present this as unavailable storage
    let err = SessionStore::open(&db_path).unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn test_upsert_then_get() {
    let db_path = setup_test_db("upsert_get");
    let store = open_store(&db_path);

    let s = sample("s1", "2025-03-01", 500);
    store.upsert(&s).expect("upsert");

    let loaded = store.get("s1").expect("get").expect("present");
    assert_eq!(loaded, s);
}

#[test]
fn test_upsert_same_session_twice_keeps_one_row() {
    let db_path = setup_test_db("upsert_idempotent");
    let store = open_store(&db_path);

    let s = sample("s1", "2025-03-01", 500);
    store.upsert(&s).expect("first upsert");
    store.upsert(&s).expect("second upsert");

    assert_eq!(store.count().expect("count"), 1);
    assert_eq!(store.get("s1").expect("get").expect("present"), s);
}

#[test]
fn test_upsert_same_id_replaces_fields() {
    let db_path = setup_test_db("upsert_replace");
    let store = open_store(&db_path);

    store
        .upsert(&sample("s1", "2025-03-01", 500))
        .expect("insert");

    let mut changed = sample("s1", "2025-03-02", -200);
    changed.location = "Home".to_string();
    changed.hands = 7;
    store.upsert(&changed).expect("replace");

    assert_eq!(store.count().expect("count"), 1);

    let loaded = store.get("s1").expect("get").expect("present");
    assert_eq!(loaded, changed);
}

#[test]
fn test_delete_absent_id_is_noop() {
    let db_path = setup_test_db("delete_absent");
    let store = open_store(&db_path);

    store
        .upsert(&sample("s1", "2025-03-01", 500))
        .expect("insert");

    // Deleting an id that was never stored must not fail nor change anything
    store.delete("never-existed").expect("delete absent");

    assert_eq!(store.count().expect("count"), 1);
    assert!(store.get("s1").expect("get").is_some());
}

#[test]
fn test_delete_removes_only_target() {
    let db_path = setup_test_db("delete_target");
    let store = open_store(&db_path);

    store
        .upsert(&sample("s1", "2025-03-01", 500))
        .expect("insert s1");
    store
        .upsert(&sample("s2", "2025-03-01", -100))
        .expect("insert s2");

    store.delete("s1").expect("delete s1");

    assert!(store.get("s1").expect("get").is_none());
    assert!(store.get("s2").expect("get").is_some());
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn test_list_by_date_equals_full_scan_filter() {
    let db_path = setup_test_db("date_filter");
    let store = open_store(&db_path);

    store
        .upsert(&sample("a1", "2025-03-01", 500))
        .expect("insert");
    store
        .upsert(&sample("a2", "2025-03-01", -150))
        .expect("insert");
    store
        .upsert(&sample("b1", "2025-03-02", 300))
        .expect("insert");
    store
        .upsert(&sample("c1", "2025-04-01", 42))
        .expect("insert");

    let indexed = sorted_by_id(store.list_by_date("2025-03-01").expect("list_by_date"));

    let scanned = sorted_by_id(
        store
            .list_all()
            .expect("list_all")
            .into_iter()
            .filter(|s| s.date == "2025-03-01")
            .collect(),
    );

    assert_eq!(indexed, scanned);
    assert_eq!(indexed.len(), 2);
}

#[test]
fn test_list_by_date_unknown_date_is_empty() {
    let db_path = setup_test_db("date_filter_empty");
    let store = open_store(&db_path);

    store
        .upsert(&sample("a1", "2025-03-01", 500))
        .expect("insert");

    assert!(store.list_by_date("1999-01-01").expect("list").is_empty());
}

#[test]
fn test_list_between_bounds_are_inclusive() {
    let db_path = setup_test_db("between_inclusive");
    let store = open_store(&db_path);

    store
        .upsert(&sample("a", "2025-03-01", 1))
        .expect("insert");
    store
        .upsert(&sample("b", "2025-03-15", 2))
        .expect("insert");
    store
        .upsert(&sample("c", "2025-03-31", 3))
        .expect("insert");
    store
        .upsert(&sample("d", "2025-04-01", 4))
        .expect("insert");

    let hits = store
        .list_between("2025-03-01", "2025-03-31")
        .expect("list_between");

    let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_replace_all_swaps_record_set() {
    let db_path = setup_test_db("replace_all");
    let mut store = open_store(&db_path);

    store
        .upsert(&sample("old1", "2025-01-01", 10))
        .expect("insert");
    store
        .upsert(&sample("old2", "2025-01-02", 20))
        .expect("insert");

    let incoming = vec![sample("new1", "2025-02-01", 30)];
    let n = store.replace_all(&incoming).expect("replace_all");
    assert_eq!(n, 1);

    let left = sorted_by_id(store.list_all().expect("list_all"));
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, "new1");
}

#[test]
fn test_replace_all_with_empty_set_clears_store() {
    let db_path = setup_test_db("replace_all_empty");
    let mut store = open_store(&db_path);

    store
        .upsert(&sample("s1", "2025-01-01", 10))
        .expect("insert");

    store.replace_all(&[]).expect("replace with empty");
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn test_replace_all_duplicate_ids_last_wins() {
    let db_path = setup_test_db("replace_all_dup");
    let mut store = open_store(&db_path);

    let first = sample("dup", "2025-01-01", 100);
    let second = sample("dup", "2025-01-02", -100);

    // The reported count is rows actually stored, not input length
    let n = store
        .replace_all(&[first, second.clone()])
        .expect("replace_all");
    assert_eq!(n, 1);

    assert_eq!(store.count().expect("count"), 1);
    assert_eq!(store.get("dup").expect("get").expect("present"), second);
}

#[test]
fn test_yearly_aggregate_sums_wins_and_losses() {
    use rtally::core::summary::SummaryLogic;

    let db_path = setup_test_db("yearly_aggregate");
    let store = open_store(&db_path);

    store
        .upsert(&sample("w", "2024-02-10", 300))
        .expect("insert win");
    store
        .upsert(&sample("l", "2024-07-03", -150))
        .expect("insert loss");
    // One outside the year, must not count
    store
        .upsert(&sample("x", "2023-12-31", 9999))
        .expect("insert other year");

    let year = store
        .list_between("2024-01-01", "2024-12-31")
        .expect("list year");
    let totals = SummaryLogic::build(&year);

    assert_eq!(totals.sessions, 2);
    assert_eq!(totals.net, 150);
    assert_eq!(totals.hands, 8);
    assert_eq!(
        totals.best_day,
        Some(("2024-02-10".to_string(), 300))
    );
    assert_eq!(
        totals.worst_day,
        Some(("2024-07-03".to_string(), -150))
    );
}
