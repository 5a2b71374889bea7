//! Record types and the store trait for the movelog blog and agent ledger.
//!
//! This crate carries no database dependency. Storage backends implement
//! [`store::MovelogStore`]; the seed loader and demo routine only see the
//! trait.

pub mod agent;
pub mod blog;
pub mod error;
pub mod store;

mod repr;

pub use error::{Error, Result};
