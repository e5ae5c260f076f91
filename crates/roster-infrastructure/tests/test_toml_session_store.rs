use chrono::{Duration, Utc};
use roster_core::session::{SessionStore, SessionSummary};
use roster_infrastructure::TomlSessionStore;
use tempfile::TempDir;

async fn seeded_store(temp_dir: &TempDir, count: i64) -> TomlSessionStore {
    let store = TomlSessionStore::new(temp_dir.path())
        .await
        .expect("Should create store");

    let base = Utc::now() - Duration::days(1);
    for i in 0..count {
        let session = SessionSummary::new(
            format!("s{i:02}"),
            format!("Session {i}"),
            base + Duration::minutes(i),
        );
        store.save(&session).await.expect("Should save session");
    }

    store
}

#[tokio::test]
async fn test_creates_sessions_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlSessionStore::new(temp_dir.path()).await.unwrap();

    assert!(store.sessions_dir().is_dir());
    assert!(store.get_all_sessions_sorted().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_paging_over_files() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 25).await;

    let first = store.get_sessions_paged(1, 10).await.unwrap();
    assert_eq!(first.sessions.len(), 10);
    assert_eq!(first.sessions[0].id, "s24");
    assert!(first.has_next_page);
    assert!(!first.has_previous_page);

    let last = store.get_sessions_paged(3, 10).await.unwrap();
    assert_eq!(last.sessions.len(), 5);
    assert_eq!(last.sessions[4].id, "s00");
    assert!(!last.has_next_page);
}

#[tokio::test]
async fn test_create_session_persists_uuid_named_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlSessionStore::new(temp_dir.path()).await.unwrap();

    let created = store.create_session("Fresh").await.unwrap();
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert!(
        store
            .sessions_dir()
            .join(format!("{}.toml", created.id))
            .exists()
    );

    let sessions = store.get_all_sessions_sorted().await.unwrap();
    assert_eq!(sessions, vec![created]);
}

#[tokio::test]
async fn test_session_files_carry_schema_version() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlSessionStore::new(temp_dir.path()).await.unwrap();

    let created = store.create_session("Versioned").await.unwrap();
    let content =
        std::fs::read_to_string(store.sessions_dir().join(format!("{}.toml", created.id)))
            .unwrap();

    assert!(content.contains("1.0.0"));
    assert!(content.contains("Versioned"));
}

#[tokio::test]
async fn test_find_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 2).await;

    let found = store.find("s01").await.unwrap().unwrap();
    assert_eq!(found.title, "Session 1");
    assert!(store.find("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 3).await;

    assert!(store.delete_session("s01").await.unwrap());
    assert!(!store.delete_session("s01").await.unwrap());

    let ids: Vec<String> = store
        .get_all_sessions_sorted()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["s02".to_string(), "s00".to_string()]);
}

#[tokio::test]
async fn test_star_and_rename() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 2).await;

    assert!(store.update_session_starred("s00", true).await.unwrap());
    assert!(store.rename_title("s00", "Renamed").await.unwrap());
    assert!(!store.rename_title("missing", "Nope").await.unwrap());
    assert!(!store.update_session_starred("missing", true).await.unwrap());

    let sessions = store.get_all_sessions_sorted().await.unwrap();
    // Updates bump recency
    assert_eq!(sessions[0].id, "s00");
    assert_eq!(sessions[0].title, "Renamed");
    assert!(sessions[0].is_starred);
}

#[tokio::test]
async fn test_unreadable_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 2).await;
    std::fs::write(store.sessions_dir().join("broken.toml"), "not = [valid").unwrap();
    std::fs::write(store.sessions_dir().join("notes.txt"), "ignored").unwrap();

    let sessions = store.get_all_sessions_sorted().await.unwrap();
    assert_eq!(sessions.len(), 2);
}

#[tokio::test]
async fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir, 1).await;
    std::fs::remove_dir_all(store.sessions_dir()).unwrap();

    let err = store.get_sessions_paged(1, 10).await.unwrap_err();
    assert!(err.is_io());
}

#[tokio::test]
async fn test_reopening_store_sees_existing_sessions() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = seeded_store(&temp_dir, 4).await;
        store.update_session_starred("s03", true).await.unwrap();
    }

    let reopened = TomlSessionStore::new(temp_dir.path()).await.unwrap();
    let sessions = reopened.get_all_sessions_sorted().await.unwrap();
    assert_eq!(sessions.len(), 4);
    assert!(sessions.iter().any(|s| s.id == "s03" && s.is_starred));
}
