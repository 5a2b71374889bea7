//! Seed data, the demonstration query and configuration for the `movelog`
//! binary.
//!
//! Everything here is generic over [`movelog_core::store::MovelogStore`]; the
//! binary plugs in the SQLite backend.

pub mod config;
pub mod demo;
pub mod dump;
pub mod error;
pub mod seed;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
