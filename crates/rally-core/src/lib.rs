//! Core library for the Rally group trip coordinator.
//!
//! Rally turns a pile of individual trip responses into a group
//! decision: the dates everyone can make, the destinations people
//! actually want, and a day-by-day plan over the agreed trip length.
//!
//! # Engine shape
//!
//! Four pure computations form the consensus engine:
//!
//! - [`dates`] expands free-text date expressions into atomic tokens
//! - [`window`] intersects everyone's availability and subtracts
//!   exclusions
//! - [`ranking`] tallies destination selections, first-seen stable on
//!   ties
//! - [`itinerary`] allocates the trip's day budget across the ranked
//!   destinations
//!
//! The [`Coordinator`] wires these over an append-only SQLite store of
//! [`models::Participant`] rows; every call reads a fresh snapshot, so
//! results are deterministic for a given set of responses. The
//! [`generator`] module is the boundary to the opaque text-completion
//! collaborator — the engine builds prompts and parses suggestion names
//! back out, nothing more.
//!
//! # Quick Start
//!
//! ```rust
//! use rally_core::{params::SubmitParticipant, CoordinatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = CoordinatorBuilder::new()
//!     .with_database_path(Some("trip.db"))
//!     .build()
//!     .await?;
//!
//! coordinator
//!     .submit(&SubmitParticipant {
//!         name: "Asha".to_string(),
//!         available: "Dec 20-22".to_string(),
//!         trip_days: 3,
//!         people: 2,
//!         budget_per_person: 15000,
//!         destinations: vec!["Munnar".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let window = coordinator.common_window().await?;
//! println!("common dates: {window:?}");
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod ranking;
pub mod window;

// Re-export commonly used types
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use dates::{DateToken, PartExpansion};
pub use db::Database;
pub use display::{Responses, Tally, Window};
pub use error::{CoordinatorError, Result};
pub use generator::SuggestionGenerator;
pub use itinerary::IdealStays;
pub use models::{DayAssignment, Participant, TallyEntry, TripPlan};
pub use params::SubmitParticipant;
