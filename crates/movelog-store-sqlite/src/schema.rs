//! SQL schema for the movelog SQLite store.
//!
//! `CREATE_TABLES` is idempotent and runs every time a store is opened.
//! `DROP_TABLES` followed by `CREATE_TABLES` is the only way data is ever
//! removed.

/// Connection-level settings applied on open.
pub const PRAGMAS: &str = "
PRAGMA foreign_keys = ON;
";

/// Every managed table, parents before dependents.
pub const TABLE_NAMES: &[&str] = &[
  "s_users",
  "t_posts",
  "s_tags",
  "s_agents",
  "s_agents_conn_types",
  "t_agents_conn",
];

pub const CREATE_TABLES: &str = "
-- Users who can write posts in the blog.
CREATE TABLE IF NOT EXISTS s_users (
    id        INTEGER PRIMARY KEY,
    username  VARCHAR(32)  NOT NULL UNIQUE CHECK (length(username) <= 32),
    email     VARCHAR(255) UNIQUE
);

CREATE TABLE IF NOT EXISTS t_posts (
    id           INTEGER PRIMARY KEY,
    user_id      INTEGER NOT NULL REFERENCES s_users(id),
    description  VARCHAR(255) UNIQUE
);

CREATE TABLE IF NOT EXISTS s_tags (
    id           INTEGER PRIMARY KEY,
    description  VARCHAR(255) UNIQUE
);

-- Service providers engaged during the move.
CREATE TABLE IF NOT EXISTS s_agents (
    id    INTEGER PRIMARY KEY,
    name  VARCHAR(255) UNIQUE
);

CREATE TABLE IF NOT EXISTS s_agents_conn_types (
    id           INTEGER PRIMARY KEY,
    description  VARCHAR(255) UNIQUE
);

-- Engagement history. agent_id and conn_type_id carry no foreign keys;
-- unresolved lookups are stored as 0.
CREATE TABLE IF NOT EXISTS t_agents_conn (
    id               INTEGER PRIMARY KEY,
    agent_id         INTEGER NOT NULL,
    conn_type_id     INTEGER NOT NULL,
    connection_date  TEXT    NOT NULL,   -- naive local time, see encode_dt
    done             BOOLEAN NOT NULL,
    note             VARCHAR(255),
    costs            REAL    NOT NULL
);

CREATE INDEX IF NOT EXISTS t_posts_user_idx ON t_posts(user_id);
";

/// Dependents before parents so the foreign key on `t_posts` never blocks a
/// drop.
pub const DROP_TABLES: &str = "
DROP TABLE IF EXISTS t_agents_conn;
DROP TABLE IF EXISTS s_agents_conn_types;
DROP TABLE IF EXISTS s_agents;
DROP TABLE IF EXISTS s_tags;
DROP TABLE IF EXISTS t_posts;
DROP TABLE IF EXISTS s_users;
";
