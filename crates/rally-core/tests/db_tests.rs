use rally_core::{params::SubmitParticipant, Database};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn submission(name: &str) -> SubmitParticipant {
    SubmitParticipant {
        name: name.to_string(),
        available: "Dec 20-22".to_string(),
        unavailable: "Dec 21".to_string(),
        trip_days: 3,
        people: 2,
        budget_per_person: 15000,
        region: Some("Kerala".to_string()),
        kid_friendly: true,
        trip_kind: Some("Hills".to_string()),
        destinations: vec!["Munnar".to_string(), "Ooty".to_string()],
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_append_participant_round_trips_all_fields() {
    let (_temp_file, mut db) = create_test_db();

    let appended = db
        .append_participant(&submission("Asha"))
        .expect("Failed to append participant");
    assert!(appended.id > 0);

    let records = db.list_participants().expect("Failed to list participants");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Asha");
    assert_eq!(record.available, "Dec 20-22");
    assert_eq!(record.unavailable, "Dec 21");
    assert_eq!(record.trip_days, 3);
    assert_eq!(record.people, 2);
    assert_eq!(record.budget_per_person, 15000);
    assert_eq!(record.region.as_deref(), Some("Kerala"));
    assert!(record.kid_friendly);
    assert_eq!(record.trip_kind.as_deref(), Some("Hills"));
    assert_eq!(record.destinations, vec!["Munnar", "Ooty"]);
}

#[test]
fn test_list_participants_preserves_submission_order() {
    let (_temp_file, mut db) = create_test_db();

    for name in ["Asha", "Ben", "Chitra", "Dev"] {
        db.append_participant(&submission(name))
            .expect("Failed to append participant");
    }

    let records = db.list_participants().expect("Failed to list participants");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Asha", "Ben", "Chitra", "Dev"]);

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_participant_count() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.participant_count().expect("count"), 0);
    db.append_participant(&submission("Asha"))
        .expect("Failed to append participant");
    db.append_participant(&submission("Ben"))
        .expect("Failed to append participant");
    assert_eq!(db.participant_count().expect("count"), 2);
}

#[test]
fn test_exclusion_sentinel_is_stored_empty() {
    let (_temp_file, mut db) = create_test_db();

    let mut params = submission("Asha");
    params.unavailable = "n/a".to_string();
    db.append_participant(&params)
        .expect("Failed to append participant");

    let records = db.list_participants().expect("Failed to list participants");
    assert_eq!(records[0].unavailable, "");
}

#[test]
fn test_destination_names_with_commas_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let mut params = submission("Asha");
    params.destinations = vec![
        "Ooty, Nilgiris".to_string(),
        "Munnar".to_string(),
    ];
    db.append_participant(&params)
        .expect("Failed to append participant");

    let records = db.list_participants().expect("Failed to list participants");
    assert_eq!(records[0].destinations, vec!["Ooty, Nilgiris", "Munnar"]);
}

#[test]
fn test_reopening_database_keeps_records() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        db.append_participant(&submission("Asha"))
            .expect("Failed to append participant");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let records = db.list_participants().expect("Failed to list participants");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Asha");
}
