//! Blog records: the users who write posts, their posts, and the tag
//! dictionary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  error::MAX_USERNAME_LEN,
  repr::Quoted,
};

// ─── Users ───────────────────────────────────────────────────────────────────

/// A person allowed to write blog posts (`s_users`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:       i64,
  pub username: String,
  pub email:    Option<String>,
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub username: String,
  pub email:    Option<String>,
}

impl NewUser {
  /// Validate `username` against the column limits before it reaches the
  /// database.
  pub fn new(username: impl Into<String>, email: Option<String>) -> Result<Self> {
    let username = username.into();
    if username.is_empty() {
      return Err(Error::EmptyUsername);
    }
    if username.chars().count() > MAX_USERNAME_LEN {
      return Err(Error::UsernameTooLong(username));
    }
    Ok(Self { username, email })
  }
}

impl fmt::Display for User {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "User(id={}, username={}, email={})",
      self.id,
      Quoted(Some(&self.username)),
      Quoted(self.email.as_deref()),
    )
  }
}

// ─── Posts ───────────────────────────────────────────────────────────────────

/// A blog post (`t_posts`). `user_id` references [`User::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub id:          i64,
  pub user_id:     i64,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
  pub user_id:     i64,
  pub description: Option<String>,
}

impl Post {
  /// Whether `needle` occurs verbatim in the post text. A post without text
  /// contains nothing.
  pub fn mentions(&self, needle: &str) -> bool {
    self
      .description
      .as_deref()
      .is_some_and(|text| text.contains(needle))
  }
}

impl fmt::Display for Post {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Post(id={}, user_id={}, description={})",
      self.id,
      self.user_id,
      Quoted(self.description.as_deref()),
    )
  }
}

// ─── Tags ────────────────────────────────────────────────────────────────────

/// An entry of the tag dictionary (`s_tags`). Not linked to posts yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  pub id:          i64,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
  pub description: Option<String>,
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Tag(id={}, description={})",
      self.id,
      Quoted(self.description.as_deref()),
    )
  }
}
