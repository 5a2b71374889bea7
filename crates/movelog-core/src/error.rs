//! Error types for `movelog-core`.

use thiserror::Error;

/// Longest username the `s_users` table accepts.
pub const MAX_USERNAME_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum Error {
  #[error("username must not be empty")]
  EmptyUsername,

  #[error("username {0:?} is longer than {MAX_USERNAME_LEN} characters")]
  UsernameTooLong(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
