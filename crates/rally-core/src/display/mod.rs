//! Display formatting for domain models and derived collections.
//!
//! Domain models implement [`std::fmt::Display`] directly; newtype
//! wrappers format collections (responses, the tally, the window) with
//! consistent empty-collection handling. All output is markdown so the
//! CLI can hand it to the terminal renderer or into the shareable
//! document unchanged.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Responses, Tally, Window)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{Responses, Tally, Window};
pub use datetime::LocalDateTime;
