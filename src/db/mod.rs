//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the storage gateway, the only place that talks to the pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Expense, NewExpense, PayerTotal};
pub use sqlite::{ExpenseStorage, SqlitePool};
