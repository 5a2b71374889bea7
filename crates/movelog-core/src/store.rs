//! The `MovelogStore` trait.
//!
//! Implemented by storage backends (e.g. `movelog-store-sqlite`). The seed
//! loader and the demo routine are written against this trait only.
//!
//! Lookups that find nothing return `Ok(None)`; errors are reserved for the
//! backend failing.

use std::future::Future;

use crate::{
  agent::{Agent, AgentConn, AgentConnType, NewAgent, NewAgentConn, NewAgentConnType},
  blog::{NewPost, NewTag, NewUser, Post, Tag, User},
};

pub trait MovelogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Schema ────────────────────────────────────────────────────────────

  /// Names of every table the store manages, in creation order.
  fn table_names(&self) -> &'static [&'static str];

  /// Drop every table and create them again. All rows are lost.
  fn recreate_schema(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Inserts ───────────────────────────────────────────────────────────
  //
  // Each call inserts its whole batch in one transaction and returns the
  // rows with their database-assigned ids, in input order.

  fn insert_users(
    &self,
    users: Vec<NewUser>,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  fn insert_posts(
    &self,
    posts: Vec<NewPost>,
  ) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send + '_;

  fn insert_tags(
    &self,
    tags: Vec<NewTag>,
  ) -> impl Future<Output = Result<Vec<Tag>, Self::Error>> + Send + '_;

  fn insert_agents(
    &self,
    agents: Vec<NewAgent>,
  ) -> impl Future<Output = Result<Vec<Agent>, Self::Error>> + Send + '_;

  fn insert_conn_types(
    &self,
    conn_types: Vec<NewAgentConnType>,
  ) -> impl Future<Output = Result<Vec<AgentConnType>, Self::Error>> + Send + '_;

  fn insert_agent_conns(
    &self,
    conns: Vec<NewAgentConn>,
  ) -> impl Future<Output = Result<Vec<AgentConn>, Self::Error>> + Send + '_;

  // ── Users and posts ───────────────────────────────────────────────────

  /// Every user, ascending by id.
  fn fetch_all_users(&self) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Case-insensitive exact match on the username.
  fn find_user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// The first post (lowest id) written by `user_id`.
  fn find_post_by_user_id(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Option<Post>, Self::Error>> + Send + '_;

  /// All posts written by `user_id`, ascending by id.
  fn posts_of_user(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send + '_;

  fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send + '_;

  fn list_tags(&self) -> impl Future<Output = Result<Vec<Tag>, Self::Error>> + Send + '_;

  // ── Agents ────────────────────────────────────────────────────────────

  /// Case-insensitive exact match on the agent name.
  fn find_agent_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Agent>, Self::Error>> + Send + 'a;

  /// Case-insensitive exact match on the connection type description.
  fn find_conn_type_by_description<'a>(
    &'a self,
    description: &'a str,
  ) -> impl Future<Output = Result<Option<AgentConnType>, Self::Error>> + Send + 'a;

  fn list_agents(&self) -> impl Future<Output = Result<Vec<Agent>, Self::Error>> + Send + '_;

  fn list_conn_types(
    &self,
  ) -> impl Future<Output = Result<Vec<AgentConnType>, Self::Error>> + Send + '_;

  fn list_agent_conns(
    &self,
  ) -> impl Future<Output = Result<Vec<AgentConn>, Self::Error>> + Send + '_;
}
