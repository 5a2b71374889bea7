//! `movelog` binary.
//!
//! Reads `movelog.toml` (or the path given with `--config`) and `MOVELOG_*`
//! environment variables, opens the configured SQLite database and runs one
//! command. Without a command it runs the demo query.
//!
//! ```text
//! movelog seed
//! movelog demo --user Buratino --tag кухня
//! MOVELOG_ECHO=true movelog
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Local;
use clap::{Parser, Subcommand};
use movelog_core::store::MovelogStore;
use movelog_seed::{
  config::Settings,
  demo::{self, DEFAULT_TAG, DEFAULT_USERNAME},
  dump, seed,
};
use movelog_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Seed and query the movelog blog database")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "movelog.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Print a user's post if it mentions a tag (the default command).
  Demo {
    #[arg(long, default_value = DEFAULT_USERNAME)]
    user: String,
    #[arg(long, default_value = DEFAULT_TAG)]
    tag:  String,
  },
  /// Drop and recreate every table.
  Init,
  /// Recreate the schema and load the sample data.
  Seed,
  /// Print every table as JSON.
  Dump,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output only.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(&cli.config)
    .with_context(|| format!("failed to read config {:?}", cli.config))?;
  let url = settings
    .database_url()
    .context("failed to parse database_url")?;

  let store = SqliteStore::connect(&url, settings.echo)
    .await
    .with_context(|| format!("failed to open database {url}"))?;

  let command = cli.command.unwrap_or(Command::Demo {
    user: DEFAULT_USERNAME.to_owned(),
    tag:  DEFAULT_TAG.to_owned(),
  });

  match command {
    Command::Demo { user, tag } => {
      if let Some(line) = demo::select_user_posts(&store, &user, &tag).await? {
        println!("{line}");
      }
    }
    Command::Init => {
      store.recreate_schema().await?;
    }
    Command::Seed => {
      store.recreate_schema().await?;
      let report = seed::insert_rows(&store, Local::now().naive_local()).await?;
      println!(
        "seeded {} users, {} posts, {} tags, {} agents, {} connection types, {} connections",
        report.users,
        report.posts,
        report.tags,
        report.agents,
        report.conn_types,
        report.agent_conns,
      );
    }
    Command::Dump => {
      let snapshot = dump::snapshot(&store).await?;
      println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
  }

  store.close().await.context("failed to close database")?;
  Ok(())
}
