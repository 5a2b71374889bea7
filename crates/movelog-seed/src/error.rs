//! Error type for `movelog-seed`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid record: {0}")]
  Core(#[from] movelog_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
