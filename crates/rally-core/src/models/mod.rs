//! Domain models for the trip coordination system.

pub mod participant;
pub mod trip;

pub use participant::Participant;
pub use trip::{DayAssignment, TallyEntry, TripPlan};
