//! Mapping between movelog record types and SQLite rows.
//!
//! Timestamps are naive local times stored as `YYYY-MM-DD HH:MM:SS.ffffff`
//! text, which sorts lexically. Everything else maps onto native SQLite
//! types.

use chrono::NaiveDateTime;
use movelog_core::{
  agent::{Agent, AgentConn, AgentConnType, NewAgent, NewAgentConn, NewAgentConnType},
  blog::{NewPost, NewTag, NewUser, Post, Tag, User},
};
use rusqlite::{Row, Statement};

use crate::{Error, Result};

// ─── NaiveDateTime ───────────────────────────────────────────────────────────

const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn encode_dt(dt: NaiveDateTime) -> String { dt.format(DT_FORMAT).to_string() }

pub fn decode_dt(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, DT_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

/// A not-yet-persisted record that knows how to insert itself.
pub trait InsertRow: Send + 'static {
  type Row: Send + 'static;

  const TABLE: &'static str;
  const INSERT: &'static str;

  /// Bind `self` to the prepared [`Self::INSERT`] statement and run it,
  /// returning the new rowid.
  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64>;

  fn with_id(self, id: i64) -> Self::Row;
}

impl InsertRow for NewUser {
  type Row = User;

  const TABLE: &'static str = "s_users";
  const INSERT: &'static str = "INSERT INTO s_users (username, email) VALUES (?1, ?2)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![self.username, self.email])
  }

  fn with_id(self, id: i64) -> User {
    User { id, username: self.username, email: self.email }
  }
}

impl InsertRow for NewPost {
  type Row = Post;

  const TABLE: &'static str = "t_posts";
  const INSERT: &'static str =
    "INSERT INTO t_posts (user_id, description) VALUES (?1, ?2)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![self.user_id, self.description])
  }

  fn with_id(self, id: i64) -> Post {
    Post { id, user_id: self.user_id, description: self.description }
  }
}

impl InsertRow for NewTag {
  type Row = Tag;

  const TABLE: &'static str = "s_tags";
  const INSERT: &'static str = "INSERT INTO s_tags (description) VALUES (?1)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![self.description])
  }

  fn with_id(self, id: i64) -> Tag { Tag { id, description: self.description } }
}

impl InsertRow for NewAgent {
  type Row = Agent;

  const TABLE: &'static str = "s_agents";
  const INSERT: &'static str = "INSERT INTO s_agents (name) VALUES (?1)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![self.name])
  }

  fn with_id(self, id: i64) -> Agent { Agent { id, name: self.name } }
}

impl InsertRow for NewAgentConnType {
  type Row = AgentConnType;

  const TABLE: &'static str = "s_agents_conn_types";
  const INSERT: &'static str =
    "INSERT INTO s_agents_conn_types (description) VALUES (?1)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![self.description])
  }

  fn with_id(self, id: i64) -> AgentConnType {
    AgentConnType { id, description: self.description }
  }
}

impl InsertRow for NewAgentConn {
  type Row = AgentConn;

  const TABLE: &'static str = "t_agents_conn";
  const INSERT: &'static str = "INSERT INTO t_agents_conn (
      agent_id, conn_type_id, connection_date, done, note, costs
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

  fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<i64> {
    stmt.insert(rusqlite::params![
      self.agent_id,
      self.conn_type_id,
      encode_dt(self.connection_date),
      self.done,
      self.note,
      self.costs,
    ])
  }

  fn with_id(self, id: i64) -> AgentConn {
    AgentConn {
      id,
      agent_id:        self.agent_id,
      conn_type_id:    self.conn_type_id,
      connection_date: self.connection_date,
      done:            self.done,
      note:            self.note,
      costs:           self.costs,
    }
  }
}

// ─── Row readers ─────────────────────────────────────────────────────────────

pub const USER_COLUMNS: &str = "id, username, email";
pub const POST_COLUMNS: &str = "id, user_id, description";
pub const TAG_COLUMNS: &str = "id, description";
pub const AGENT_COLUMNS: &str = "id, name";
pub const CONN_TYPE_COLUMNS: &str = "id, description";
pub const AGENT_CONN_COLUMNS: &str =
  "id, agent_id, conn_type_id, connection_date, done, note, costs";

pub fn read_user(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:       row.get(0)?,
    username: row.get(1)?,
    email:    row.get(2)?,
  })
}

pub fn read_post(row: &Row<'_>) -> rusqlite::Result<Post> {
  Ok(Post {
    id:          row.get(0)?,
    user_id:     row.get(1)?,
    description: row.get(2)?,
  })
}

pub fn read_tag(row: &Row<'_>) -> rusqlite::Result<Tag> {
  Ok(Tag { id: row.get(0)?, description: row.get(1)? })
}

pub fn read_agent(row: &Row<'_>) -> rusqlite::Result<Agent> {
  Ok(Agent { id: row.get(0)?, name: row.get(1)? })
}

pub fn read_conn_type(row: &Row<'_>) -> rusqlite::Result<AgentConnType> {
  Ok(AgentConnType { id: row.get(0)?, description: row.get(1)? })
}

/// Raw values read from a `t_agents_conn` row; the timestamp is decoded
/// outside the connection thread.
pub struct RawAgentConn {
  pub id:              i64,
  pub agent_id:        i64,
  pub conn_type_id:    i64,
  pub connection_date: String,
  pub done:            bool,
  pub note:            Option<String>,
  pub costs:           f64,
}

pub fn read_agent_conn(row: &Row<'_>) -> rusqlite::Result<RawAgentConn> {
  Ok(RawAgentConn {
    id:              row.get(0)?,
    agent_id:        row.get(1)?,
    conn_type_id:    row.get(2)?,
    connection_date: row.get(3)?,
    done:            row.get(4)?,
    note:            row.get(5)?,
    costs:           row.get(6)?,
  })
}

impl RawAgentConn {
  pub fn into_agent_conn(self) -> Result<AgentConn> {
    Ok(AgentConn {
      id:              self.id,
      agent_id:        self.agent_id,
      conn_type_id:    self.conn_type_id,
      connection_date: decode_dt(&self.connection_date)?,
      done:            self.done,
      note:            self.note,
      costs:           self.costs,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn dt_keeps_microseconds() {
    let dt = NaiveDate::from_ymd_opt(2024, 8, 15)
      .and_then(|d| d.and_hms_micro_opt(9, 5, 7, 123_456))
      .unwrap();
    let text = encode_dt(dt);
    assert_eq!(text, "2024-08-15 09:05:07.123456");
    assert_eq!(decode_dt(&text).unwrap(), dt);
  }

  #[test]
  fn decode_dt_rejects_rfc3339() {
    let err = decode_dt("2024-08-15T09:05:07Z").unwrap_err();
    assert!(matches!(err, Error::DateParse(_)));
  }
}
