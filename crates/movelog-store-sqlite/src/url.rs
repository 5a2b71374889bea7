//! Parsing of the configured database URL.
//!
//! Accepted forms:
//!
//! - `sqlite::memory:` or `:memory:` — a private in-memory database
//! - `sqlite://<path>` or `sqlite:<path>` — a database file
//! - a bare filesystem path

use std::{fmt, path::PathBuf, str::FromStr};

use crate::Error;

const MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
  Memory,
  File(PathBuf),
}

impl FromStr for DatabaseUrl {
  type Err = Error;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    let trimmed = raw.trim();

    let location = if let Some(rest) = trimmed.strip_prefix("sqlite://") {
      rest
    } else if let Some(rest) = trimmed.strip_prefix("sqlite:") {
      rest
    } else if trimmed.contains("://") {
      return Err(Error::UnsupportedUrl(raw.to_owned()));
    } else {
      trimmed
    };

    match location {
      "" => Err(Error::UnsupportedUrl(raw.to_owned())),
      MEMORY => Ok(Self::Memory),
      path => Ok(Self::File(PathBuf::from(path))),
    }
  }
}

impl fmt::Display for DatabaseUrl {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Memory => write!(f, "sqlite:{MEMORY}"),
      Self::File(path) => write!(f, "sqlite://{}", path.display()),
    }
  }
}
