use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use portal_core::model::{RoleId, UnitId};
use portal_core::progress::CompletedUnits;
use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

fn temp_db(name: &str) -> (PathBuf, String) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("portal_{name}_{}_{nanos}.sqlite3", std::process::id()));
    let url = format!("sqlite://{}?mode=rwc", path.display());
    (path, url)
}

fn cleanup(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

#[tokio::test]
async fn sqlite_kv_upserts_and_deletes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("progress:qa").await.unwrap(), None);
    repo.put("progress:qa", "[]").await.unwrap();
    repo.put("progress:qa", r#"["qa-1"]"#).await.unwrap();
    assert_eq!(
        repo.get("progress:qa").await.unwrap().as_deref(),
        Some(r#"["qa-1"]"#)
    );

    repo.delete("progress:qa").await.unwrap();
    repo.delete("progress:qa").await.unwrap();
    assert_eq!(repo.get("progress:qa").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn progress_survives_reconnect() {
    let (path, url) = temp_db("reconnect");
    let developer = RoleId::new("developer");
    let completed = CompletedUnits::from_ids([UnitId::new("dev-int-1"), UnitId::new("lwc-1")]);

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage
            .progress
            .save_completed(&developer, &completed)
            .await
            .unwrap();
    }

    let reopened = Storage::sqlite(&url).await.expect("reopen");
    let loaded = reopened.progress.load_completed(&developer).await.unwrap();
    assert_eq!(loaded, completed);

    let raw = reopened.kv.get("progress:developer").await.unwrap();
    assert_eq!(raw.as_deref(), Some(r#"["dev-int-1","lwc-1"]"#));

    drop(reopened);
    cleanup(&path);
}

#[tokio::test]
async fn corrupt_row_loads_empty_and_next_save_overwrites() {
    let storage = Storage::sqlite("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("open");
    let qa = RoleId::new("qa");
    storage.kv.put("progress:qa", "not json").await.unwrap();

    let mut loaded = storage.progress.load_completed(&qa).await.unwrap();
    assert!(loaded.is_empty());

    loaded.insert(UnitId::new("qa-1"));
    storage.progress.save_completed(&qa, &loaded).await.unwrap();
    assert_eq!(
        storage.kv.get("progress:qa").await.unwrap().as_deref(),
        Some(r#"["qa-1"]"#)
    );
}
