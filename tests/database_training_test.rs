// ABOUTME: Integration tests for the training cluster storage operations
// ABOUTME: Range checks, ordered sessions and sets, prescriptions, cascades, set-null on routine delete

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use uuid::Uuid;

use vita_server::database::Database;
use vita_server::errors::ErrorCode;
use vita_server::models::{
    ExperienceLevel, Gender, InjurySeverity, NewInjury, NewProfile, NewRoutine,
    NewSessionExercise, NewSessionInjury, NewTrainingSession, NewWorkoutSet, RiskLevel,
    RoutineType,
};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

fn push_pull_legs(days_per_week: i64) -> NewRoutine {
    NewRoutine {
        name: "Push Pull Legs".into(),
        description: "Three-way body-part split".into(),
        routine_type: RoutineType::Hypertrophy,
        duration_weeks: 12,
        days_per_week,
        level: ExperienceLevel::Intermediate,
        active: true,
    }
}

fn session_for(routine_id: i64, name: &str, weekday: i64, order: i64) -> NewTrainingSession {
    NewTrainingSession {
        routine_id,
        name: name.into(),
        description: String::new(),
        weekday,
        estimated_duration_minutes: 60,
        display_order: order,
    }
}

#[tokio::test]
async fn test_days_per_week_range() {
    let db = create_test_db().await;

    // Boundaries accepted
    db.create_routine(&push_pull_legs(1))
        .await
        .expect("1 day per week must be accepted");
    db.create_routine(&push_pull_legs(7))
        .await
        .expect("7 days per week must be accepted");

    // Out-of-range rejected
    for days in [0, 8] {
        let err = db
            .create_routine(&push_pull_legs(days))
            .await
            .expect_err("out-of-range days_per_week must be rejected");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[tokio::test]
async fn test_session_weekday_range() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();

    db.create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .expect("weekday 1 must be accepted");
    db.create_training_session(&session_for(routine.id, "Legs", 7, 2))
        .await
        .expect("weekday 7 must be accepted");

    for weekday in [0, 8] {
        let err = db
            .create_training_session(&session_for(routine.id, "Invalid", weekday, 3))
            .await
            .expect_err("out-of-range weekday must be rejected");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[tokio::test]
async fn test_sessions_listed_in_display_order() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();

    db.create_training_session(&session_for(routine.id, "Legs", 5, 3))
        .await
        .unwrap();
    db.create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .unwrap();
    db.create_training_session(&session_for(routine.id, "Pull", 3, 2))
        .await
        .unwrap();

    let sessions = db.list_training_sessions(routine.id).await.unwrap();
    let names: Vec<&str> = sessions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Push", "Pull", "Legs"]);
}

#[tokio::test]
async fn test_prescription_pair_unique_and_updatable() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();
    let session = db
        .create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .unwrap();
    let exercise = db
        .create_exercise(&vita_server::models::NewExercise {
            name: "Overhead Press".into(),
            description: String::new(),
            instructions: String::new(),
            category_id: None,
            difficulty: ExperienceLevel::Intermediate,
            estimated_calories: 6,
        })
        .await
        .unwrap();

    let prescription = db
        .add_session_exercise(&NewSessionExercise {
            session_id: session.id,
            exercise_id: exercise.id,
            display_order: 1,
            sets: 3,
            reps: 8,
            recommended_weight_kg: Some(40.0),
            rest_seconds: 120,
            notes: String::new(),
        })
        .await
        .unwrap();

    let err = db
        .add_session_exercise(&NewSessionExercise {
            session_id: session.id,
            exercise_id: exercise.id,
            display_order: 2,
            sets: 4,
            reps: 10,
            recommended_weight_kg: None,
            rest_seconds: 90,
            notes: String::new(),
        })
        .await
        .expect_err("Prescribing the same exercise twice in a session must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let mut heavier = prescription.clone();
    heavier.recommended_weight_kg = Some(42.5);
    heavier.reps = 6;
    db.update_session_exercise(&heavier)
        .await
        .expect("Failed to update prescription");

    let listed = db.list_session_exercises(session.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].reps, 6);
    assert_eq!(listed[0].recommended_weight_kg, Some(42.5));
}

#[tokio::test]
async fn test_sets_listed_by_number() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();
    let session = db
        .create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .unwrap();

    for number in [2, 1, 3] {
        db.add_workout_set(&NewWorkoutSet {
            session_id: session.id,
            set_number: number,
            target_reps: 10,
            weight_kg: Some(60.0),
            rest_seconds: 90,
            completed: false,
            notes: String::new(),
        })
        .await
        .unwrap();
    }

    let sets = db.list_workout_sets(session.id).await.unwrap();
    let numbers: Vec<i64> = sets.iter().map(|s| s.set_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    // Mark the first set completed
    let mut done = sets[0].clone();
    done.completed = true;
    db.update_workout_set(&done).await.unwrap();

    let after = db.list_workout_sets(session.id).await.unwrap();
    assert!(after[0].completed);
    assert!(!after[1].completed);
}

#[tokio::test]
async fn test_routine_delete_cascades_sessions_but_detaches_profiles() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();
    let session = db
        .create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .unwrap();
    db.add_workout_set(&NewWorkoutSet {
        session_id: session.id,
        set_number: 1,
        target_reps: 10,
        weight_kg: None,
        rest_seconds: 60,
        completed: false,
        notes: String::new(),
    })
    .await
    .unwrap();

    let profile = db
        .create_profile(&NewProfile {
            user_id: Uuid::new_v4(),
            full_name: "Jordan Reyes".into(),
            birth_date: NaiveDate::from_ymd_opt(1988, 9, 2).unwrap(),
            gender: Gender::Female,
            height_cm: 165.0,
            current_weight_kg: 61.0,
            objective_id: None,
            routine_id: Some(routine.id),
        })
        .await
        .unwrap();

    db.delete_routine(routine.id)
        .await
        .expect("Failed to delete routine");

    // Sessions and their sets are gone
    assert!(db
        .get_training_session(session.id)
        .await
        .unwrap()
        .is_none());
    assert!(db.list_workout_sets(session.id).await.unwrap().is_empty());

    // The profile survives with its routine reference cleared
    let after = db
        .get_profile(profile.id)
        .await
        .unwrap()
        .expect("Profile must survive routine deletion");
    assert_eq!(after.routine_id, None);
}

#[tokio::test]
async fn test_session_injury_contraindications() {
    let db = create_test_db().await;
    let routine = db.create_routine(&push_pull_legs(3)).await.unwrap();
    let session = db
        .create_training_session(&session_for(routine.id, "Push", 1, 1))
        .await
        .unwrap();

    let profile = db
        .create_profile(&NewProfile {
            user_id: Uuid::new_v4(),
            full_name: "Sam Okafor".into(),
            birth_date: NaiveDate::from_ymd_opt(1995, 6, 30).unwrap(),
            gender: Gender::Male,
            height_cm: 182.0,
            current_weight_kg: 88.0,
            objective_id: None,
            routine_id: None,
        })
        .await
        .unwrap();

    let injury = db
        .create_injury(&NewInjury {
            profile_id: profile.id,
            name: "Shoulder impingement".into(),
            description: String::new(),
            affected_muscle_group: "shoulders".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            estimated_recovery_date: None,
            active: true,
            severity: InjurySeverity::Moderate,
        })
        .await
        .unwrap();

    let contraindication = db
        .add_session_injury(&NewSessionInjury {
            injury_id: injury.id,
            session_id: session.id,
            contraindication: "Overhead pressing aggravates the impingement".into(),
            risk_level: RiskLevel::Forbidden,
        })
        .await
        .unwrap();
    assert_eq!(contraindication.risk_level, RiskLevel::Forbidden);

    assert_eq!(db.list_session_injuries(session.id).await.unwrap().len(), 1);
    assert_eq!(db.list_injury_sessions(injury.id).await.unwrap().len(), 1);

    // Deleting the session removes the contraindication but not the injury
    db.delete_training_session(session.id).await.unwrap();
    assert!(db.list_injury_sessions(injury.id).await.unwrap().is_empty());
    assert!(db.get_injury(injury.id).await.unwrap().is_some());
}
