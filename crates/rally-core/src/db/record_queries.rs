//! Append and read-all queries for participant records.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{CoordinatorError, DatabaseResultExt, Result},
    models::Participant,
    params::SubmitParticipant,
};

const INSERT_PARTICIPANT_SQL: &str = "INSERT INTO participants \
    (name, available, unavailable, trip_days, people, budget_per_person, \
     region, kid_friendly, trip_kind, destinations, created_at) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

const SELECT_PARTICIPANTS_SQL: &str = "SELECT id, name, available, unavailable, \
    trip_days, people, budget_per_person, region, kid_friendly, trip_kind, \
    destinations, created_at FROM participants ORDER BY id";

impl super::Database {
    /// Appends one participant response. Records are never updated or
    /// deleted afterwards.
    pub fn append_participant(&mut self, params_in: &SubmitParticipant) -> Result<Participant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let unavailable = params_in.normalized_unavailable();
        // JSON rather than a joined string: destination names may
        // themselves contain commas.
        let destinations_json = serde_json::to_string(&params_in.destinations)?;

        tx.execute(
            INSERT_PARTICIPANT_SQL,
            params![
                params_in.name,
                params_in.available,
                unavailable,
                params_in.trip_days,
                params_in.people,
                params_in.budget_per_person,
                params_in.region,
                params_in.kid_friendly,
                params_in.trip_kind,
                destinations_json,
                &now_str,
            ],
        )
        .map_err(|e| CoordinatorError::database("Failed to insert participant", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Participant {
            id,
            name: params_in.name.clone(),
            available: params_in.available.clone(),
            unavailable,
            trip_days: params_in.trip_days,
            people: params_in.people,
            budget_per_person: params_in.budget_per_person,
            region: params_in.region.clone(),
            kid_friendly: params_in.kid_friendly,
            trip_kind: params_in.trip_kind.clone(),
            destinations: params_in.destinations.clone(),
            created_at: now,
        })
    }

    /// Reads all participant responses in submission order.
    pub fn list_participants(&self) -> Result<Vec<Participant>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PARTICIPANTS_SQL)
            .map_err(|e| CoordinatorError::database("Failed to prepare query", e))?;

        let rows = stmt
            .query_map([], |row| {
                let destinations_json: String = row.get(10)?;
                let destinations = serde_json::from_str(&destinations_json).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
                })?;
                Ok(Participant {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    available: row.get(2)?,
                    unavailable: row.get(3)?,
                    trip_days: row.get(4)?,
                    people: row.get(5)?,
                    budget_per_person: row.get(6)?,
                    region: row.get(7)?,
                    kid_friendly: row.get(8)?,
                    trip_kind: row.get(9)?,
                    destinations,
                    created_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e)),
                    )?,
                })
            })
            .map_err(|e| CoordinatorError::database("Failed to query participants", e))?;

        let mut participants = Vec::new();
        for row in rows {
            participants
                .push(row.map_err(|e| CoordinatorError::database("Failed to read row", e))?);
        }
        Ok(participants)
    }

    /// Number of responses recorded so far.
    pub fn participant_count(&self) -> Result<u64> {
        self.connection
            .query_row("SELECT COUNT(*) FROM participants", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as u64)
            .db_context("Failed to count participants")
    }
}
