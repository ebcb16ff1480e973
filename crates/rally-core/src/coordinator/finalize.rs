//! Consensus operations: common window, destination tally, finalization.

use log::info;

use super::Coordinator;
use crate::{
    dates::DateToken,
    error::{CoordinatorError, Result},
    itinerary::{allocate, IdealStays},
    models::{Participant, TallyEntry, TripPlan},
    ranking, window,
};

impl Coordinator {
    /// Computes the common feasible date window over the current snapshot.
    ///
    /// An empty result means no shared date survived; it is not an
    /// error at this level.
    pub async fn common_window(&self) -> Result<Vec<DateToken>> {
        let records = self.participants().await?;
        Ok(window::common_window(&records))
    }

    /// Computes the destination popularity tally over the current snapshot.
    pub async fn destination_tally(&self) -> Result<Vec<TallyEntry>> {
        let records = self.participants().await?;
        Ok(ranking::rank(&records))
    }

    /// Finalizes the group trip with the builtin stay-length table.
    pub async fn finalize(&self) -> Result<TripPlan> {
        self.finalize_with(&IdealStays::builtin()).await
    }

    /// Finalizes the group trip with a custom stay-length table.
    ///
    /// Takes a single snapshot and threads it through window, tally, and
    /// allocation so all three agree about which records exist.
    ///
    /// # Errors
    ///
    /// - [`CoordinatorError::NoRecords`] with zero responses
    /// - [`CoordinatorError::NoCommonDates`] when the window is empty
    /// - [`CoordinatorError::NoSelections`] when nobody picked a destination
    pub async fn finalize_with(&self, stays: &IdealStays) -> Result<TripPlan> {
        let records = self.participants().await?;
        if records.is_empty() {
            return Err(CoordinatorError::NoRecords);
        }

        let window = window::common_window(&records);
        if window.is_empty() {
            return Err(CoordinatorError::NoCommonDates);
        }

        let tally = ranking::rank(&records);
        if tally.is_empty() {
            return Err(CoordinatorError::NoSelections);
        }

        let total_people: u32 = records.iter().map(|r| r.people).sum();
        let average_budget = average(&records, |r| r.budget_per_person);
        let average_days = average(&records, |r| r.trip_days).max(1);

        let ranked: Vec<String> = tally.iter().map(|e| e.destination.clone()).collect();
        let days = allocate(&ranked, stays, average_days)?;

        info!(
            "finalized trip: {} over {} days for {} people",
            ranked[0], average_days, total_people
        );

        Ok(TripPlan {
            destination: ranked[0].clone(),
            window,
            total_people,
            average_budget,
            average_days,
            tally,
            days,
        })
    }
}

fn average(records: &[Participant], field: impl Fn(&Participant) -> u32) -> u32 {
    let sum: u64 = records.iter().map(|r| u64::from(field(r))).sum();
    (sum / records.len() as u64) as u32
}
