//! A full read of every table, for the `dump` command.

use movelog_core::{
  agent::{Agent, AgentConn, AgentConnType},
  blog::{Post, Tag, User},
  store::MovelogStore,
};
use serde::Serialize;

use crate::{Error, Result};

/// Every row of every table, each list ascending by id.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
  pub users:       Vec<User>,
  pub posts:       Vec<Post>,
  pub tags:        Vec<Tag>,
  pub agents:      Vec<Agent>,
  pub conn_types:  Vec<AgentConnType>,
  pub agent_conns: Vec<AgentConn>,
}

pub async fn snapshot<S: MovelogStore>(store: &S) -> Result<Snapshot> {
  Ok(Snapshot {
    users:       store.fetch_all_users().await.map_err(Error::store)?,
    posts:       store.list_posts().await.map_err(Error::store)?,
    tags:        store.list_tags().await.map_err(Error::store)?,
    agents:      store.list_agents().await.map_err(Error::store)?,
    conn_types:  store.list_conn_types().await.map_err(Error::store)?,
    agent_conns: store.list_agent_conns().await.map_err(Error::store)?,
  })
}
