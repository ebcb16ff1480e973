//! Participant intake operations for the Coordinator.

use tokio::task;

use super::Coordinator;
use crate::{
    db::Database,
    error::{CoordinatorError, Result},
    models::Participant,
    params::SubmitParticipant,
};

impl Coordinator {
    /// Records one participant response.
    ///
    /// Validates the fields the engine depends on (non-empty name, at
    /// least one day and one person), normalizes the exclusion sentinel
    /// replies, and appends the row. Availability text is stored as
    /// typed — expansion happens at aggregation time, so an unparseable
    /// label is not a submission error.
    pub async fn submit(&self, params: &SubmitParticipant) -> Result<Participant> {
        if params.name.trim().is_empty() {
            return Err(CoordinatorError::invalid_input("name", "must not be empty"));
        }
        if params.trip_days < 1 {
            return Err(CoordinatorError::invalid_input(
                "trip_days",
                "must be at least 1",
            ));
        }
        if params.people < 1 {
            return Err(CoordinatorError::invalid_input(
                "people",
                "must be at least 1",
            ));
        }

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.append_participant(&params)
        })
        .await
        .map_err(|e| CoordinatorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reads all participant responses in submission order.
    pub async fn participants(&self) -> Result<Vec<Participant>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_participants()
        })
        .await
        .map_err(|e| CoordinatorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
