//! Database operations and SQLite management for participant records.
//!
//! The store is deliberately minimal: participants are append-only rows
//! with no update or delete path, and every read returns the full
//! snapshot in submission order. Consensus computations depend on that
//! ordering for their tie-breaks, so it is part of the store contract.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod record_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
