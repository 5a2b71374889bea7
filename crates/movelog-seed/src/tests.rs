//! Seed and demo tests against an in-memory SQLite store.

use chrono::{NaiveDate, NaiveDateTime};
use movelog_core::store::MovelogStore;
use movelog_store_sqlite::SqliteStore;

use crate::{
  demo::{self, DEFAULT_TAG, DEFAULT_USERNAME},
  dump,
  seed::{self, ADMIN_USERNAME, SeedReport},
};

fn seeded_at() -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 9, 1)
    .and_then(|d| d.and_hms_opt(10, 0, 0))
    .unwrap()
}

async fn seeded() -> SqliteStore {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  store.recreate_schema().await.unwrap();
  seed::insert_rows(&store, seeded_at()).await.unwrap();
  store
}

// ─── Seed ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_reports_every_group() {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let report = seed::insert_rows(&store, seeded_at()).await.unwrap();

  assert_eq!(report, SeedReport {
    users:       5,
    agents:      5,
    conn_types:  6,
    tags:        4,
    agent_conns: 3,
    posts:       2,
  });
}

#[tokio::test]
async fn seeded_users_are_ordered_with_admin_first() {
  let store = seeded().await;
  let users = store.fetch_all_users().await.unwrap();

  assert_eq!(users.len(), 5);
  assert!(users.windows(2).all(|w| w[0].id < w[1].id));
  assert_eq!(users[0].username, ADMIN_USERNAME);
  assert_eq!(users[0].email.as_deref(), Some("admin@admin.ru"));
}

#[tokio::test]
async fn emails_pair_positionally() {
  let store = seeded().await;
  let users = store.fetch_all_users().await.unwrap();

  let pairs: Vec<_> = users
    .iter()
    .map(|u| (u.username.as_str(), u.email.as_deref()))
    .collect();
  assert_eq!(pairs, [
    ("admin", Some("admin@admin.ru")),
    ("Olesya", Some("Chernyavskaya_OS@mail.ru")),
    ("Aisha", Some("Aisha_@mail.ru")),
    ("Buratino", None),
    ("Chipollino", None),
  ]);
}

#[tokio::test]
async fn reseeding_after_recreate_yields_same_users() {
  let store = seeded().await;
  let first = store.fetch_all_users().await.unwrap();

  store.recreate_schema().await.unwrap();
  seed::insert_rows(&store, seeded_at()).await.unwrap();
  let second = store.fetch_all_users().await.unwrap();

  assert_eq!(first, second);
}

#[tokio::test]
async fn seeding_twice_without_recreate_fails() {
  let store = seeded().await;
  assert!(seed::insert_rows(&store, seeded_at()).await.is_err());
}

#[tokio::test]
async fn agent_conns_resolve_their_own_agents() {
  let store = seeded().await;
  let conns = store.list_agent_conns().await.unwrap();
  assert_eq!(conns.len(), 3);

  for (conn, expected) in conns.iter().zip(seed::AGENT_CONNS) {
    let agent = store.find_agent_by_name(expected.agent).await.unwrap().unwrap();
    let kind = store
      .find_conn_type_by_description(expected.conn_type)
      .await
      .unwrap()
      .unwrap();

    assert_eq!(conn.agent_id, agent.id);
    assert_eq!(conn.conn_type_id, kind.id);
    assert_eq!(conn.done, expected.done);
    assert_eq!(conn.costs, expected.costs);
    assert_eq!(conn.connection_date, seeded_at());
  }
}

#[tokio::test]
async fn posts_belong_to_chipollino_and_buratino() {
  let store = seeded().await;

  let chipollino = store.find_user_by_username("Chipollino").await.unwrap().unwrap();
  let buratino = store.find_user_by_username("Buratino").await.unwrap().unwrap();

  let posts = store.posts_of_user(chipollino.id).await.unwrap();
  assert_eq!(posts.len(), 1);
  assert!(posts[0].mentions("переезд"));

  let posts = store.posts_of_user(buratino.id).await.unwrap();
  assert_eq!(posts.len(), 1);
  assert!(posts[0].mentions("кухня"));
}

#[tokio::test]
async fn unresolved_names_become_zero() {
  let store = SqliteStore::open_in_memory().await.unwrap();

  assert_eq!(seed::agent_id_or_zero(&store, "Сантехник").await.unwrap(), 0);
  assert_eq!(
    seed::conn_type_id_or_zero(&store, "Покраска стен").await.unwrap(),
    0
  );
  assert_eq!(seed::user_id_or_zero(&store, "Pinocchio").await.unwrap(), 0);
}

// ─── Demo ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn demo_prints_when_tag_present() {
  let store = seeded().await;
  let line = demo::select_user_posts(&store, DEFAULT_USERNAME, DEFAULT_TAG)
    .await
    .unwrap()
    .expect("message");

  assert_eq!(
    line,
    "Пост от Chipollino с тегом 'переезд': В Петербург я никогда не собирался. \
     Но волею судеб свершился этот переезд. И что же будет дальше?"
  );
}

#[tokio::test]
async fn demo_username_is_case_insensitive() {
  let store = seeded().await;
  let line = demo::select_user_posts(&store, "chipollino", "переезд")
    .await
    .unwrap();
  assert!(line.is_some());
}

#[tokio::test]
async fn demo_silent_when_tag_absent() {
  let store = seeded().await;
  let line = demo::select_user_posts(&store, "Chipollino", "кухня")
    .await
    .unwrap();
  assert!(line.is_none());
}

#[tokio::test]
async fn demo_silent_for_user_without_posts() {
  let store = seeded().await;
  let line = demo::select_user_posts(&store, "Aisha", "переезд")
    .await
    .unwrap();
  assert!(line.is_none());
}

#[tokio::test]
async fn demo_silent_for_unknown_user() {
  let store = seeded().await;
  let line = demo::select_user_posts(&store, "Pinocchio", "переезд")
    .await
    .unwrap();
  assert!(line.is_none());
}

#[tokio::test]
async fn demo_on_empty_database() {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let line = demo::select_user_posts(&store, DEFAULT_USERNAME, DEFAULT_TAG)
    .await
    .unwrap();
  assert!(line.is_none());
}

// ─── Dump ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn snapshot_covers_seeded_tables() {
  let store = seeded().await;
  let snap = dump::snapshot(&store).await.unwrap();

  assert_eq!(snap.users.len(), 5);
  assert_eq!(snap.posts.len(), 2);
  assert_eq!(snap.tags.len(), 4);
  assert_eq!(snap.agents.len(), 5);
  assert_eq!(snap.conn_types.len(), 6);
  assert_eq!(snap.agent_conns.len(), 3);

  let json = serde_json::to_value(&snap).unwrap();
  assert_eq!(json["users"][0]["username"], "admin");
  assert_eq!(json["tags"][3]["description"], "переезд");
}
