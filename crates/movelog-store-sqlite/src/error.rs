//! Error type for `movelog-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The configured database URL names a backend other than SQLite, or no
  /// location at all.
  #[error("unsupported database url: {0:?}")]
  UnsupportedUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
