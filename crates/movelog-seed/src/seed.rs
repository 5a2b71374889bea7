//! The fixed sample data set: a blog about moving to Saint Petersburg and the
//! contractors hired along the way.

use chrono::NaiveDateTime;
use movelog_core::{
  agent::{NewAgent, NewAgentConn, NewAgentConnType},
  blog::{NewPost, NewTag, NewUser},
  store::MovelogStore,
};

use crate::{Error, Result};

// ─── Data ────────────────────────────────────────────────────────────────────

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@admin.ru";

/// Regular users; paired positionally with [`USER_EMAILS`]. Users past the
/// end of the email list get no email.
pub const USERNAMES: &[&str] = &["Olesya", "Aisha", "Buratino", "Chipollino"];
pub const USER_EMAILS: &[&str] = &["Chernyavskaya_OS@mail.ru", "Aisha_@mail.ru"];

pub const AGENT_NAMES: &[&str] = &[
  "Ремонтная бригада",
  "Логистическая компания",
  "Петербургские кухни",
  "Поставщик материалов",
  "Магазин",
];

pub const CONN_TYPES: &[&str] = &[
  "Производство кухни",
  "Установка кухни",
  "Замена проводки",
  "Перевозка мебели",
  "Перевозка техники",
  "Капитальный ремонт",
];

pub const TAGS: &[&str] = &["ремонт", "закупка", "кухня", "переезд"];

/// One engagement, with the agent and connection type given by name.
pub struct SeedConn {
  pub agent:     &'static str,
  pub conn_type: &'static str,
  pub done:      bool,
  pub note:      &'static str,
  pub costs:     f64,
}

pub const AGENT_CONNS: &[SeedConn] = &[
  SeedConn {
    agent:     "Ремонтная бригада",
    conn_type: "Капитальный ремонт",
    done:      false,
    note:      "завершено на 70%",
    costs:     600.0,
  },
  SeedConn {
    agent:     "Логистическая компания",
    conn_type: "Перевозка мебели",
    done:      false,
    note:      "завершено на 30%",
    costs:     50.0,
  },
  SeedConn {
    agent:     "Петербургские кухни",
    conn_type: "Производство кухни",
    done:      true,
    note:      "завершено на 100%",
    costs:     120.0,
  },
];

/// `(author username, post text)`
pub const POSTS: &[(&str, &str)] = &[
  (
    "Chipollino",
    "В Петербург я никогда не собирался. Но волею судеб свершился этот \
     переезд. И что же будет дальше?",
  ),
  (
    "Buratino",
    "Далее потянулся ремонт, закупка материалов, и скоро будет еще одна \
     новая кухня.",
  ),
];

// ─── Loader ──────────────────────────────────────────────────────────────────

/// Row counts written by [`insert_rows`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub users:       usize,
  pub agents:      usize,
  pub conn_types:  usize,
  pub tags:        usize,
  pub agent_conns: usize,
  pub posts:       usize,
}

/// Insert the sample data set into an empty schema.
///
/// Every group is committed before the next one is built, so the later groups
/// can resolve foreign keys by name. A name that fails to resolve becomes id
/// `0` and a warning; the row is still inserted.
pub async fn insert_rows<S: MovelogStore>(store: &S, now: NaiveDateTime) -> Result<SeedReport> {
  let mut report = SeedReport::default();

  let mut users = vec![NewUser::new(ADMIN_USERNAME, Some(ADMIN_EMAIL.to_owned()))?];
  for (i, username) in USERNAMES.iter().enumerate() {
    let email = USER_EMAILS.get(i).map(|e| (*e).to_owned());
    users.push(NewUser::new(*username, email)?);
  }
  report.users = store.insert_users(users).await.map_err(Error::store)?.len();

  let agents = AGENT_NAMES
    .iter()
    .map(|name| NewAgent { name: Some((*name).to_owned()) })
    .collect();
  report.agents = store.insert_agents(agents).await.map_err(Error::store)?.len();

  let conn_types = CONN_TYPES
    .iter()
    .map(|d| NewAgentConnType { description: Some((*d).to_owned()) })
    .collect();
  report.conn_types = store
    .insert_conn_types(conn_types)
    .await
    .map_err(Error::store)?
    .len();

  let tags = TAGS
    .iter()
    .map(|d| NewTag { description: Some((*d).to_owned()) })
    .collect();
  report.tags = store.insert_tags(tags).await.map_err(Error::store)?.len();

  let mut conns = Vec::with_capacity(AGENT_CONNS.len());
  for seed in AGENT_CONNS {
    conns.push(NewAgentConn {
      agent_id:        agent_id_or_zero(store, seed.agent).await?,
      conn_type_id:    conn_type_id_or_zero(store, seed.conn_type).await?,
      connection_date: now,
      done:            seed.done,
      note:            Some(seed.note.to_owned()),
      costs:           seed.costs,
    });
  }
  report.agent_conns = store
    .insert_agent_conns(conns)
    .await
    .map_err(Error::store)?
    .len();

  let mut posts = Vec::with_capacity(POSTS.len());
  for (author, text) in POSTS {
    posts.push(NewPost {
      user_id:     user_id_or_zero(store, author).await?,
      description: Some((*text).to_owned()),
    });
  }
  report.posts = store.insert_posts(posts).await.map_err(Error::store)?.len();

  tracing::info!(?report, "seeded database");
  Ok(report)
}

// ─── Name resolution ─────────────────────────────────────────────────────────
//
// An unresolved name yields 0 rather than an error or a skipped row. 0 never
// matches a real row; for posts the foreign key on `t_posts.user_id` rejects
// it at insert time.

pub(crate) async fn agent_id_or_zero<S: MovelogStore>(store: &S, name: &str) -> Result<i64> {
  let found = store.find_agent_by_name(name).await.map_err(Error::store)?;
  Ok(id_or_zero("agent", name, found.map(|a| a.id)))
}

pub(crate) async fn conn_type_id_or_zero<S: MovelogStore>(
  store: &S,
  description: &str,
) -> Result<i64> {
  let found = store
    .find_conn_type_by_description(description)
    .await
    .map_err(Error::store)?;
  Ok(id_or_zero("connection type", description, found.map(|c| c.id)))
}

pub(crate) async fn user_id_or_zero<S: MovelogStore>(store: &S, username: &str) -> Result<i64> {
  let found = store
    .find_user_by_username(username)
    .await
    .map_err(Error::store)?;
  Ok(id_or_zero("user", username, found.map(|u| u.id)))
}

fn id_or_zero(kind: &str, key: &str, id: Option<i64>) -> i64 {
  id.unwrap_or_else(|| {
    tracing::warn!(kind, key, "lookup found nothing; using id 0");
    0
  })
}
