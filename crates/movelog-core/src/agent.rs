//! Agents (service providers hired during the move), the kinds of service
//! they provide, and the history of engagements with them.
//!
//! `AgentConn` refers to agents and connection types by id only; the store
//! does not enforce those references.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::repr::Quoted;

// ─── Agents ──────────────────────────────────────────────────────────────────

/// A service provider (`s_agents`), e.g. a repair crew or a logistics firm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
  pub id:   i64,
  pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgent {
  pub name: Option<String>,
}

impl fmt::Display for Agent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Agent(id={}, name={})", self.id, Quoted(self.name.as_deref()))
  }
}

// ─── Connection types ────────────────────────────────────────────────────────

/// A kind of service an agent can be engaged for (`s_agents_conn_types`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConnType {
  pub id:          i64,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgentConnType {
  pub description: Option<String>,
}

impl fmt::Display for AgentConnType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "AgentConnType(id={}, description={})",
      self.id,
      Quoted(self.description.as_deref()),
    )
  }
}

// ─── Connection history ──────────────────────────────────────────────────────

/// One engagement with an agent (`t_agents_conn`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConn {
  pub id:              i64,
  pub agent_id:        i64,
  pub conn_type_id:    i64,
  /// Local wall-clock time of the engagement.
  pub connection_date: NaiveDateTime,
  pub done:            bool,
  pub note:            Option<String>,
  pub costs:           f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAgentConn {
  pub agent_id:        i64,
  pub conn_type_id:    i64,
  pub connection_date: NaiveDateTime,
  pub done:            bool,
  pub note:            Option<String>,
  pub costs:           f64,
}

impl fmt::Display for AgentConn {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "AgentConn(id={}, agent_id={}, conn_type_id={}, connection_date={}, \
       done={}, note={}, costs={:?})",
      self.id,
      self.agent_id,
      self.conn_type_id,
      self.connection_date,
      self.done,
      Quoted(self.note.as_deref()),
      self.costs,
    )
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn agent_conn_display() {
    let conn = AgentConn {
      id:              1,
      agent_id:        2,
      conn_type_id:    6,
      connection_date: NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .expect("valid date"),
      done:            false,
      note:            None,
      costs:           50.0,
    };
    assert_eq!(
      conn.to_string(),
      "AgentConn(id=1, agent_id=2, conn_type_id=6, connection_date=2024-03-01 \
       12:30:00, done=false, note=None, costs=50.0)"
    );
  }
}
