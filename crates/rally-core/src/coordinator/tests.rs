//! Tests for the coordinator module.

use tempfile::TempDir;

use super::*;
use crate::dates::DateToken;
use crate::error::CoordinatorError;
use crate::params::SubmitParticipant;

/// Helper function to create a test coordinator
async fn create_test_coordinator() -> (TempDir, Coordinator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let coordinator = CoordinatorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create coordinator");
    (temp_dir, coordinator)
}

fn response(name: &str, available: &str, unavailable: &str, destinations: &[&str]) -> SubmitParticipant {
    SubmitParticipant {
        name: name.to_string(),
        available: available.to_string(),
        unavailable: unavailable.to_string(),
        trip_days: 3,
        people: 2,
        budget_per_person: 12000,
        region: None,
        kid_friendly: false,
        trip_kind: None,
        destinations: destinations.iter().map(|d| (*d).to_string()).collect(),
    }
}

#[tokio::test]
async fn submit_validates_required_fields() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    let err = coordinator
        .submit(&response("  ", "Dec 20", "", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, CoordinatorError::InvalidInput { .. }));

    let mut params = response("Asha", "Dec 20", "", &[]);
    params.trip_days = 0;
    let err = coordinator.submit(&params).await.unwrap_err();
    assert!(matches!(err, CoordinatorError::InvalidInput { .. }));
}

#[tokio::test]
async fn submit_normalizes_exclusion_sentinel() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 20-22", "none", &["Munnar"]))
        .await
        .expect("Failed to submit");

    let records = coordinator.participants().await.expect("Failed to list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unavailable, "");
}

#[tokio::test]
async fn participants_come_back_in_submission_order() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    for name in ["Asha", "Ben", "Chitra"] {
        coordinator
            .submit(&response(name, "Dec 20-22", "", &[]))
            .await
            .expect("Failed to submit");
    }

    let records = coordinator.participants().await.expect("Failed to list");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Asha", "Ben", "Chitra"]);
}

#[tokio::test]
async fn finalize_end_to_end_two_participants() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 20-22", "", &["Munnar"]))
        .await
        .expect("Failed to submit");
    coordinator
        .submit(&response("Ben", "Dec 21-23", "Dec 22", &["Munnar", "Ooty"]))
        .await
        .expect("Failed to submit");

    let window = coordinator.common_window().await.expect("Failed to compute");
    assert_eq!(window, vec![DateToken::new("Dec 21")]);

    let tally = coordinator.destination_tally().await.expect("Failed to rank");
    assert_eq!(tally[0].destination, "Munnar");
    assert_eq!(tally[0].count, 2);
    assert_eq!(tally[1].destination, "Ooty");
    assert_eq!(tally[1].count, 1);

    let plan = coordinator.finalize().await.expect("Failed to finalize");
    assert_eq!(plan.destination, "Munnar");
    assert_eq!(plan.window, vec![DateToken::new("Dec 21")]);
    assert_eq!(plan.total_people, 4);
    assert_eq!(plan.average_budget, 12000);
    assert_eq!(plan.average_days, 3);
    assert_eq!(plan.days.len(), 3);
    assert!(plan.days.iter().all(|d| d.destination == "Munnar"));
}

#[tokio::test]
async fn finalize_with_no_records_errors() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    let err = coordinator.finalize().await.unwrap_err();
    assert!(matches!(err, CoordinatorError::NoRecords));
}

#[tokio::test]
async fn finalize_with_disjoint_dates_errors() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 20-21", "", &["Munnar"]))
        .await
        .expect("Failed to submit");
    coordinator
        .submit(&response("Ben", "Dec 24-25", "", &["Munnar"]))
        .await
        .expect("Failed to submit");

    let err = coordinator.finalize().await.unwrap_err();
    assert!(matches!(err, CoordinatorError::NoCommonDates));
}

#[tokio::test]
async fn finalize_with_no_selections_errors() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 20-22", "", &[]))
        .await
        .expect("Failed to submit");

    let err = coordinator.finalize().await.unwrap_err();
    assert!(matches!(err, CoordinatorError::NoSelections));
}

#[tokio::test]
async fn consensus_is_idempotent_over_a_snapshot() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 18-25", "Dec 23", &["Coorg", "Ooty"]))
        .await
        .expect("Failed to submit");
    coordinator
        .submit(&response("Ben", "Dec 20-24", "", &["Ooty"]))
        .await
        .expect("Failed to submit");

    let first_window = coordinator.common_window().await.expect("window");
    let second_window = coordinator.common_window().await.expect("window");
    assert_eq!(first_window, second_window);

    let first_tally = coordinator.destination_tally().await.expect("tally");
    let second_tally = coordinator.destination_tally().await.expect("tally");
    assert_eq!(first_tally, second_tally);
}

#[tokio::test]
async fn appending_unparseable_availability_empties_the_window() {
    let (_temp_dir, coordinator) = create_test_coordinator().await;

    coordinator
        .submit(&response("Asha", "Dec 20-22", "", &["Munnar"]))
        .await
        .expect("Failed to submit");
    assert!(!coordinator.common_window().await.expect("window").is_empty());

    coordinator
        .submit(&response("Ben", "", "", &["Munnar"]))
        .await
        .expect("Failed to submit");
    assert!(coordinator.common_window().await.expect("window").is_empty());
}
