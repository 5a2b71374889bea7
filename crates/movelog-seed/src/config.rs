//! Runtime configuration.
//!
//! Values come from an optional TOML file overlaid by `MOVELOG_*` environment
//! variables:
//!
//! ```toml
//! database_url = "sqlite://movelog.db"
//! echo         = false
//! ```

use std::path::Path;

use movelog_store_sqlite::DatabaseUrl;
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://movelog.db";

const ENV_PREFIX: &str = "MOVELOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Where the database lives; see [`DatabaseUrl`] for accepted forms.
  pub database_url: String,
  /// Log every SQL statement on the `movelog::sql` target.
  pub echo:         bool,
}

impl Settings {
  /// Load settings from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::load_from(path, Some(config::Environment::with_prefix(ENV_PREFIX)))
  }

  /// Defaults, then `path`, then `env` when given.
  fn load_from(
    path: &Path,
    env: Option<config::Environment>,
  ) -> Result<Self, config::ConfigError> {
    let mut builder = config::Config::builder()
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .set_default("echo", false)?
      .add_source(config::File::from(path).required(false));
    if let Some(env) = env {
      builder = builder.add_source(env);
    }
    builder.build()?.try_deserialize()
  }

  pub fn database_url(&self) -> movelog_store_sqlite::Result<DatabaseUrl> {
    self.database_url.parse()
  }
}
