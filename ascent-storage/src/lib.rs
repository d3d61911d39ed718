//! SQLite persistence for Ascent score history.
//!
//! Layout mirrors the subsystem split: `connection` owns the serialized
//! write connection and pragmas, `migrations` the versioned schema,
//! `queries` one module per table, and `store` the [`SqliteScoreStore`]
//! implementation of `ascent_core::ScoreStore`.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::Database;
pub use store::SqliteScoreStore;
