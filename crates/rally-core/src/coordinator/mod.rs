//! High-level coordinator API for group trip consensus.
//!
//! The [`Coordinator`] is the engine facade: it owns the database path,
//! reads a fresh snapshot of participant responses per call, and runs
//! the pure consensus computations over that snapshot.
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌──────────────┐
//! │  record_ops  │    │     finalize      │    │   Database   │
//! │ (submit,     │───▶│ (window, tally,   │───▶│  (via db/)   │
//! │  list)       │    │  allocation)      │    │              │
//! └──────────────┘    └───────────────────┘    └──────────────┘
//!   Data intake         Consensus engine        Persistence
//! ```
//!
//! Every operation reads the store once and treats the snapshot as
//! immutable for the duration of the call. Finalization is not
//! linearizable with concurrent submissions — it answers for whichever
//! snapshot it read, and a multi-step caller that needs window, tally,
//! and allocation to agree must go through [`Coordinator::finalize`],
//! which takes a single snapshot and threads it through all three steps.

use std::path::PathBuf;

pub mod builder;
pub mod finalize;
pub mod record_ops;

#[cfg(test)]
mod tests;

pub use builder::CoordinatorBuilder;

/// Main coordinator interface for trip consensus operations.
pub struct Coordinator {
    pub(crate) db_path: PathBuf,
}

impl Coordinator {
    /// Creates a new coordinator with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
