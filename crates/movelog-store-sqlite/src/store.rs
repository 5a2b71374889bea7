//! [`SqliteStore`] — the SQLite implementation of [`MovelogStore`].

use movelog_core::{
  agent::{Agent, AgentConn, AgentConnType, NewAgent, NewAgentConn, NewAgentConnType},
  blog::{NewPost, NewTag, NewUser, Post, Tag, User},
  store::MovelogStore,
};
use rusqlite::{OptionalExtension as _, Row, ToSql, functions::FunctionFlags};

use crate::{
  DatabaseUrl, Result,
  encode::{
    AGENT_COLUMNS, AGENT_CONN_COLUMNS, CONN_TYPE_COLUMNS, InsertRow, POST_COLUMNS,
    RawAgentConn, TAG_COLUMNS, USER_COLUMNS, read_agent, read_agent_conn, read_conn_type,
    read_post, read_tag, read_user,
  },
  schema::{CREATE_TABLES, DROP_TABLES, PRAGMAS, TABLE_NAMES},
};

type ReadRow<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movelog store backed by a single SQLite connection.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open the database `url` points at. With `echo` set, every statement
  /// run on the connection is logged on the `movelog::sql` target.
  pub async fn connect(url: &DatabaseUrl, echo: bool) -> Result<Self> {
    let conn = match url {
      DatabaseUrl::Memory => tokio_rusqlite::Connection::open_in_memory().await?,
      DatabaseUrl::File(path) => tokio_rusqlite::Connection::open(path).await?,
    };
    tracing::debug!(%url, echo, "opened database");
    Self::init(conn, echo).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, false).await
  }

  /// Close the connection once pending calls have finished.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init(conn: tokio_rusqlite::Connection, echo: bool) -> Result<Self> {
    conn
      .call(move |conn| {
        conn.trace(echo.then_some(echo_sql as fn(&str)));
        conn.create_scalar_function(
          "unicode_lower",
          1,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
          },
        )?;
        conn.execute_batch(PRAGMAS)?;
        conn.execute_batch(CREATE_TABLES)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn })
  }

  /// Insert `items` in a single transaction, returning them with their ids.
  async fn insert_batch<N: InsertRow>(&self, items: Vec<N>) -> Result<Vec<N::Row>> {
    let count = items.len();

    let rows = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut rows = Vec::with_capacity(items.len());
        {
          let mut stmt = tx.prepare(N::INSERT)?;
          for item in items {
            let id = item.insert(&mut stmt)?;
            rows.push(item.with_id(id));
          }
        }
        tx.commit()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(table = N::TABLE, count, "inserted rows");
    Ok(rows)
  }

  /// Run a parameterless `SELECT` and collect every row.
  async fn select_all<T: Send + 'static>(
    &self,
    sql: String,
    read: ReadRow<T>,
  ) -> Result<Vec<T>> {
    self.select_many(sql, None::<i64>, read).await
  }

  /// Run a `SELECT` with at most one positional parameter and collect every
  /// row.
  async fn select_many<P, T>(
    &self,
    sql: String,
    param: Option<P>,
    read: ReadRow<T>,
  ) -> Result<Vec<T>>
  where
    P: ToSql + Send + 'static,
    T: Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = match &param {
          Some(p) => stmt.query_map(rusqlite::params![p], read)?,
          None => stmt.query_map([], read)?,
        }
        .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Run a single-parameter `SELECT` and return its first row, if any.
  async fn select_first<P, T>(&self, sql: String, param: P, read: ReadRow<T>) -> Result<Option<T>>
  where
    P: ToSql + Send + 'static,
    T: Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![param], read)
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }
}

fn echo_sql(sql: &str) {
  tracing::info!(target: "movelog::sql", "{sql}");
}

// ─── MovelogStore impl ───────────────────────────────────────────────────────

impl MovelogStore for SqliteStore {
  type Error = crate::Error;

  // ── Schema ────────────────────────────────────────────────────────────────

  fn table_names(&self) -> &'static [&'static str] { TABLE_NAMES }

  async fn recreate_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(DROP_TABLES)?;
        tx.execute_batch(CREATE_TABLES)?;
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(tables = ?TABLE_NAMES, "recreated schema");
    Ok(())
  }

  // ── Inserts ───────────────────────────────────────────────────────────────

  async fn insert_users(&self, users: Vec<NewUser>) -> Result<Vec<User>> {
    self.insert_batch(users).await
  }

  async fn insert_posts(&self, posts: Vec<NewPost>) -> Result<Vec<Post>> {
    self.insert_batch(posts).await
  }

  async fn insert_tags(&self, tags: Vec<NewTag>) -> Result<Vec<Tag>> {
    self.insert_batch(tags).await
  }

  async fn insert_agents(&self, agents: Vec<NewAgent>) -> Result<Vec<Agent>> {
    self.insert_batch(agents).await
  }

  async fn insert_conn_types(
    &self,
    conn_types: Vec<NewAgentConnType>,
  ) -> Result<Vec<AgentConnType>> {
    self.insert_batch(conn_types).await
  }

  async fn insert_agent_conns(&self, conns: Vec<NewAgentConn>) -> Result<Vec<AgentConn>> {
    self.insert_batch(conns).await
  }

  // ── Users and posts ───────────────────────────────────────────────────────

  async fn fetch_all_users(&self) -> Result<Vec<User>> {
    self
      .select_all(
        format!("SELECT {USER_COLUMNS} FROM s_users ORDER BY id"),
        read_user,
      )
      .await
  }

  async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
    self
      .select_first(
        format!(
          "SELECT {USER_COLUMNS} FROM s_users
           WHERE unicode_lower(username) = unicode_lower(?1)
           ORDER BY id LIMIT 1"
        ),
        username.to_owned(),
        read_user,
      )
      .await
  }

  async fn find_post_by_user_id(&self, user_id: i64) -> Result<Option<Post>> {
    self
      .select_first(
        format!("SELECT {POST_COLUMNS} FROM t_posts WHERE user_id = ?1 ORDER BY id LIMIT 1"),
        user_id,
        read_post,
      )
      .await
  }

  async fn posts_of_user(&self, user_id: i64) -> Result<Vec<Post>> {
    self
      .select_many(
        format!("SELECT {POST_COLUMNS} FROM t_posts WHERE user_id = ?1 ORDER BY id"),
        Some(user_id),
        read_post,
      )
      .await
  }

  async fn list_posts(&self) -> Result<Vec<Post>> {
    self
      .select_all(
        format!("SELECT {POST_COLUMNS} FROM t_posts ORDER BY id"),
        read_post,
      )
      .await
  }

  async fn list_tags(&self) -> Result<Vec<Tag>> {
    self
      .select_all(format!("SELECT {TAG_COLUMNS} FROM s_tags ORDER BY id"), read_tag)
      .await
  }

  // ── Agents ────────────────────────────────────────────────────────────────

  async fn find_agent_by_name(&self, name: &str) -> Result<Option<Agent>> {
    self
      .select_first(
        format!(
          "SELECT {AGENT_COLUMNS} FROM s_agents
           WHERE unicode_lower(name) = unicode_lower(?1)
           ORDER BY id LIMIT 1"
        ),
        name.to_owned(),
        read_agent,
      )
      .await
  }

  async fn find_conn_type_by_description(
    &self,
    description: &str,
  ) -> Result<Option<AgentConnType>> {
    self
      .select_first(
        format!(
          "SELECT {CONN_TYPE_COLUMNS} FROM s_agents_conn_types
           WHERE unicode_lower(description) = unicode_lower(?1)
           ORDER BY id LIMIT 1"
        ),
        description.to_owned(),
        read_conn_type,
      )
      .await
  }

  async fn list_agents(&self) -> Result<Vec<Agent>> {
    self
      .select_all(
        format!("SELECT {AGENT_COLUMNS} FROM s_agents ORDER BY id"),
        read_agent,
      )
      .await
  }

  async fn list_conn_types(&self) -> Result<Vec<AgentConnType>> {
    self
      .select_all(
        format!("SELECT {CONN_TYPE_COLUMNS} FROM s_agents_conn_types ORDER BY id"),
        read_conn_type,
      )
      .await
  }

  async fn list_agent_conns(&self) -> Result<Vec<AgentConn>> {
    let raws: Vec<RawAgentConn> = self
      .select_all(
        format!("SELECT {AGENT_CONN_COLUMNS} FROM t_agents_conn ORDER BY id"),
        read_agent_conn,
      )
      .await?;

    raws.into_iter().map(RawAgentConn::into_agent_conn).collect()
  }
}
