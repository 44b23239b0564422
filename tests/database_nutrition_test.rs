// ABOUTME: Integration tests for the nutrition cluster storage operations
// ABOUTME: Per-day uniqueness, date lookup, plan cascade, and log ordering

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use uuid::Uuid;

use vita_server::database::Database;
use vita_server::errors::ErrorCode;
use vita_server::models::{
    DietType, Gender, NewNutritionLog, NewNutritionPlan, NewProfile,
};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

async fn create_profile(db: &Database) -> i64 {
    db.create_profile(&NewProfile {
        user_id: Uuid::new_v4(),
        full_name: "Robin Castillo".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 12, 8).unwrap(),
        gender: Gender::Other,
        height_cm: 171.0,
        current_weight_kg: 68.0,
        objective_id: None,
        routine_id: None,
    })
    .await
    .expect("Failed to create profile")
    .id
}

fn log_for(profile_id: i64, date: NaiveDate) -> NewNutritionLog {
    NewNutritionLog {
        profile_id,
        date,
        calorie_target: 2400,
        calories_consumed: 1900,
        protein_g: 140.0,
        carbs_g: 220.0,
        fat_g: 60.0,
        water_liters: 2.5,
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_one_log_per_profile_and_date() {
    let db = create_test_db().await;
    let profile_id = create_profile(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();

    db.create_nutrition_log(&log_for(profile_id, date))
        .await
        .expect("Failed to create log");

    let err = db
        .create_nutrition_log(&log_for(profile_id, date))
        .await
        .expect_err("Second log for the same (profile, date) must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // A different date is fine
    db.create_nutrition_log(&log_for(
        profile_id,
        NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
    ))
    .await
    .expect("A log for another date must be accepted");

    // Another profile may log the same date
    let other_profile = create_profile(&db).await;
    db.create_nutrition_log(&log_for(other_profile, date))
        .await
        .expect("Another profile's log for the same date must be accepted");
}

#[tokio::test]
async fn test_date_lookup_and_ordering() {
    let db = create_test_db().await;
    let profile_id = create_profile(&db).await;

    let first = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
    let second = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
    db.create_nutrition_log(&log_for(profile_id, first))
        .await
        .unwrap();
    db.create_nutrition_log(&log_for(profile_id, second))
        .await
        .unwrap();

    let found = db
        .get_nutrition_log_by_date(profile_id, first)
        .await
        .unwrap()
        .expect("Log not found by date");
    assert_eq!(found.date, first);

    assert!(db
        .get_nutrition_log_by_date(profile_id, NaiveDate::from_ymd_opt(2026, 5, 6).unwrap())
        .await
        .unwrap()
        .is_none());

    // Newest first
    let logs = db.list_nutrition_logs(profile_id).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date, second);
    assert_eq!(logs[1].date, first);
}

#[tokio::test]
async fn test_update_log_totals() {
    let db = create_test_db().await;
    let profile_id = create_profile(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();

    let log = db
        .create_nutrition_log(&log_for(profile_id, date))
        .await
        .unwrap();

    let mut updated = log.clone();
    updated.calories_consumed = 2350;
    updated.water_liters = 3.0;
    db.update_nutrition_log(&updated).await.unwrap();

    let fetched = db
        .get_nutrition_log(log.id)
        .await
        .unwrap()
        .expect("Log not found");
    assert_eq!(fetched.calories_consumed, 2350);
    assert!((fetched.water_liters - 3.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_deleting_log_cascades_plans() {
    let db = create_test_db().await;
    let profile_id = create_profile(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();

    let log = db
        .create_nutrition_log(&log_for(profile_id, date))
        .await
        .unwrap();

    db.create_nutrition_plan(&NewNutritionPlan {
        log_id: log.id,
        name: "Spring cut".into(),
        description: String::new(),
        diet_type: DietType::Cutting,
        duration_weeks: 8,
        start_date: date,
        end_date: NaiveDate::from_ymd_opt(2026, 6, 29).unwrap(),
        active: true,
    })
    .await
    .unwrap();

    assert_eq!(db.list_nutrition_plans(log.id).await.unwrap().len(), 1);

    db.delete_nutrition_log(log.id).await.unwrap();

    assert!(db.get_nutrition_log(log.id).await.unwrap().is_none());
    assert!(db.list_nutrition_plans(log.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_profile_delete_cascades_logs() {
    let db = create_test_db().await;
    let profile_id = create_profile(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();

    let log = db
        .create_nutrition_log(&log_for(profile_id, date))
        .await
        .unwrap();

    db.delete_profile(profile_id).await.unwrap();

    assert!(db.get_nutrition_log(log.id).await.unwrap().is_none());
}
