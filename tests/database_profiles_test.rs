// ABOUTME: Integration tests for the profile cluster storage operations
// ABOUTME: Uniqueness, range validation, one-to-one settings, cascades, and set-null

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use uuid::Uuid;

use vita_server::database::Database;
use vita_server::errors::ErrorCode;
use vita_server::models::{
    FatigueLevel, Gender, InjurySeverity, NewInjury, NewProfile, NewProfileStateEntry,
    NewUserSettings,
};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

fn sample_profile(user_id: Uuid) -> NewProfile {
    NewProfile {
        user_id,
        full_name: "Alex Carter".into(),
        birth_date: NaiveDate::from_ymd_opt(1992, 4, 13).unwrap(),
        gender: Gender::Other,
        height_cm: 178.0,
        current_weight_kg: 74.5,
        objective_id: None,
        routine_id: None,
    }
}

#[tokio::test]
async fn test_objective_name_unique() {
    let db = create_test_db().await;

    db.create_objective("Hypertrophy", "Build muscle mass")
        .await
        .expect("Failed to create objective");

    let err = db
        .create_objective("Hypertrophy", "Duplicate")
        .await
        .expect_err("Duplicate objective name must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // The store is unchanged
    let objectives = db.list_objectives().await.expect("Failed to list");
    assert_eq!(objectives.len(), 1);
    assert_eq!(objectives[0].description, "Build muscle mass");
}

#[tokio::test]
async fn test_physical_state_severity_range() {
    let db = create_test_db().await;

    // Boundaries are accepted
    let low = db
        .create_physical_state("Fine", "", 1)
        .await
        .expect("severity 1 must be accepted");
    assert_eq!(low.severity_level, 1);

    let high = db
        .create_physical_state("Exhausted", "", 5)
        .await
        .expect("severity 5 must be accepted");
    assert_eq!(high.severity_level, 5);

    // Out-of-range values are rejected at write time
    for severity in [0, 6] {
        let err = db
            .create_physical_state("Invalid", "", severity)
            .await
            .expect_err("out-of-range severity must be rejected");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[tokio::test]
async fn test_one_profile_per_identity() {
    let db = create_test_db().await;
    let user_id = Uuid::new_v4();

    db.create_profile(&sample_profile(user_id))
        .await
        .expect("Failed to create profile");

    let err = db
        .create_profile(&sample_profile(user_id))
        .await
        .expect_err("Second profile for the same identity must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_profile_crud_roundtrip() {
    let db = create_test_db().await;
    let user_id = Uuid::new_v4();

    let created = db
        .create_profile(&sample_profile(user_id))
        .await
        .expect("Failed to create profile");

    let fetched = db
        .get_profile(created.id)
        .await
        .expect("Failed to get profile")
        .expect("Profile not found");
    assert_eq!(fetched.full_name, "Alex Carter");
    assert_eq!(fetched.gender, Gender::Other);
    assert_eq!(fetched.user_id, user_id);

    let by_user = db
        .get_profile_by_user(user_id)
        .await
        .expect("Failed to get profile by user")
        .expect("Profile not found by user");
    assert_eq!(by_user.id, created.id);

    let mut updated = fetched.clone();
    updated.current_weight_kg = 72.0;
    db.update_profile(&updated)
        .await
        .expect("Failed to update profile");

    let after = db
        .get_profile(created.id)
        .await
        .expect("Failed to get profile")
        .expect("Profile not found");
    assert!((after.current_weight_kg - 72.0).abs() < f64::EPSILON);
    assert!(after.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_deleting_objective_detaches_profiles() {
    let db = create_test_db().await;

    let objective = db
        .create_objective("Strength", "")
        .await
        .expect("Failed to create objective");

    let mut new_profile = sample_profile(Uuid::new_v4());
    new_profile.objective_id = Some(objective.id);
    let profile = db
        .create_profile(&new_profile)
        .await
        .expect("Failed to create profile");

    db.delete_objective(objective.id)
        .await
        .expect("Failed to delete objective");

    // The profile survives with its objective reference cleared
    let after = db
        .get_profile(profile.id)
        .await
        .expect("Failed to get profile")
        .expect("Profile must survive objective deletion");
    assert_eq!(after.objective_id, None);
}

#[tokio::test]
async fn test_settings_one_to_one() {
    let db = create_test_db().await;

    let profile = db
        .create_profile(&sample_profile(Uuid::new_v4()))
        .await
        .expect("Failed to create profile");

    let settings = db
        .create_user_settings(&NewUserSettings::defaults_for(profile.id))
        .await
        .expect("Failed to create settings");
    assert!(settings.notifications_enabled);

    let err = db
        .create_user_settings(&NewUserSettings::defaults_for(profile.id))
        .await
        .expect_err("Second settings row for a profile must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let mut updated = settings.clone();
    updated.dark_theme = true;
    updated.language = "es".into();
    db.update_user_settings(&updated)
        .await
        .expect("Failed to update settings");

    let fetched = db
        .get_user_settings(profile.id)
        .await
        .expect("Failed to get settings")
        .expect("Settings not found");
    assert!(fetched.dark_theme);
    assert_eq!(fetched.language, "es");
}

#[tokio::test]
async fn test_profile_state_entries_ordered_and_cascading() {
    let db = create_test_db().await;

    let profile = db
        .create_profile(&sample_profile(Uuid::new_v4()))
        .await
        .expect("Failed to create profile");
    let state = db
        .create_physical_state("Fatigued", "", 3)
        .await
        .expect("Failed to create state");

    for muscle in ["biceps", "shoulders"] {
        db.record_profile_state(&NewProfileStateEntry {
            profile_id: profile.id,
            state_id: state.id,
            muscle_group: muscle.into(),
            fatigue_level: FatigueLevel::Fatigued,
            notes: String::new(),
        })
        .await
        .expect("Failed to record state");
    }

    let entries = db
        .list_profile_state_entries(profile.id)
        .await
        .expect("Failed to list entries");
    assert_eq!(entries.len(), 2);

    // Deleting the referenced state removes its entries
    db.delete_physical_state(state.id)
        .await
        .expect("Failed to delete state");
    let after = db
        .list_profile_state_entries(profile.id)
        .await
        .expect("Failed to list entries");
    assert!(after.is_empty());
}

#[tokio::test]
async fn test_profile_delete_cascades_owned_rows() {
    let db = create_test_db().await;

    let profile = db
        .create_profile(&sample_profile(Uuid::new_v4()))
        .await
        .expect("Failed to create profile");
    db.create_user_settings(&NewUserSettings::defaults_for(profile.id))
        .await
        .expect("Failed to create settings");
    let injury = db
        .create_injury(&NewInjury {
            profile_id: profile.id,
            name: "Rotator cuff strain".into(),
            description: "Overhead pressing pain".into(),
            affected_muscle_group: "shoulders".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            estimated_recovery_date: None,
            active: true,
            severity: InjurySeverity::Moderate,
        })
        .await
        .expect("Failed to create injury");

    db.delete_profile(profile.id)
        .await
        .expect("Failed to delete profile");

    assert!(db
        .get_profile(profile.id)
        .await
        .expect("query failed")
        .is_none());
    assert!(db
        .get_user_settings(profile.id)
        .await
        .expect("query failed")
        .is_none());
    assert!(db
        .get_injury(injury.id)
        .await
        .expect("query failed")
        .is_none());
}

#[tokio::test]
async fn test_injury_listing_and_update() {
    let db = create_test_db().await;

    let profile = db
        .create_profile(&sample_profile(Uuid::new_v4()))
        .await
        .expect("Failed to create profile");

    let older = db
        .create_injury(&NewInjury {
            profile_id: profile.id,
            name: "Sprained ankle".into(),
            description: String::new(),
            affected_muscle_group: "calves".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            estimated_recovery_date: Some(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()),
            active: true,
            severity: InjurySeverity::Mild,
        })
        .await
        .expect("Failed to create injury");

    let newer = db
        .create_injury(&NewInjury {
            profile_id: profile.id,
            name: "Lower back pain".into(),
            description: String::new(),
            affected_muscle_group: "lower back".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            estimated_recovery_date: None,
            active: true,
            severity: InjurySeverity::Severe,
        })
        .await
        .expect("Failed to create injury");

    let injuries = db
        .list_injuries(profile.id)
        .await
        .expect("Failed to list injuries");
    assert_eq!(injuries.len(), 2);
    // Most recent first
    assert_eq!(injuries[0].id, newer.id);
    assert_eq!(injuries[1].id, older.id);

    let mut recovered = injuries[1].clone();
    recovered.active = false;
    db.update_injury(&recovered)
        .await
        .expect("Failed to update injury");

    let fetched = db
        .get_injury(older.id)
        .await
        .expect("query failed")
        .expect("Injury not found");
    assert!(!fetched.active);
}
