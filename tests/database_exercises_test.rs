// ABOUTME: Integration tests for the exercise catalog storage operations
// ABOUTME: Catalog uniqueness, activation range, junction pair-uniqueness, media ordering, taxonomy cascades

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vita_server::database::Database;
use vita_server::errors::ErrorCode;
use vita_server::models::{
    BodyRegion, ExperienceLevel, FocusLevel, MediaType, NewExercise, NewExerciseEquipmentLink,
    NewExerciseMedia, NewExerciseMuscleLink,
};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

fn bench_press() -> NewExercise {
    NewExercise {
        name: "Barbell Bench Press".into(),
        description: "Horizontal pressing movement".into(),
        instructions: "Lie on the bench, unrack, lower to the chest, press up.".into(),
        category_id: None,
        difficulty: ExperienceLevel::Intermediate,
        estimated_calories: 8,
    }
}

#[tokio::test]
async fn test_catalog_names_unique() {
    let db = create_test_db().await;

    db.create_exercise_category("Strength", "")
        .await
        .expect("Failed to create category");
    let err = db
        .create_exercise_category("Strength", "again")
        .await
        .expect_err("Duplicate category name must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    db.create_muscle_group("Chest", "", BodyRegion::Upper)
        .await
        .expect("Failed to create muscle group");
    let err = db
        .create_muscle_group("Chest", "", BodyRegion::Upper)
        .await
        .expect_err("Duplicate muscle group name must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    db.create_equipment("Barbell", "", false)
        .await
        .expect("Failed to create equipment");
    let err = db
        .create_equipment("Barbell", "", true)
        .await
        .expect_err("Duplicate equipment name must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // Each store still holds exactly one row
    assert_eq!(db.list_exercise_categories().await.unwrap().len(), 1);
    assert_eq!(db.list_muscle_groups().await.unwrap().len(), 1);
    assert_eq!(db.list_equipment().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_activation_percent_range() {
    let db = create_test_db().await;

    let exercise = db.create_exercise(&bench_press()).await.unwrap();
    let chest = db
        .create_muscle_group("Chest", "", BodyRegion::Upper)
        .await
        .unwrap();
    let triceps = db
        .create_muscle_group("Triceps", "", BodyRegion::Upper)
        .await
        .unwrap();

    // Boundary values are accepted
    db.link_exercise_muscle(&NewExerciseMuscleLink {
        exercise_id: exercise.id,
        muscle_group_id: chest.id,
        focus_level: FocusLevel::Primary,
        activation_percent: 100,
    })
    .await
    .expect("activation 100 must be accepted");

    db.link_exercise_muscle(&NewExerciseMuscleLink {
        exercise_id: exercise.id,
        muscle_group_id: triceps.id,
        focus_level: FocusLevel::Secondary,
        activation_percent: 1,
    })
    .await
    .expect("activation 1 must be accepted");

    // Out-of-range values are rejected
    let shoulders = db
        .create_muscle_group("Shoulders", "", BodyRegion::Upper)
        .await
        .unwrap();
    for percent in [0, 101] {
        let err = db
            .link_exercise_muscle(&NewExerciseMuscleLink {
                exercise_id: exercise.id,
                muscle_group_id: shoulders.id,
                focus_level: FocusLevel::Secondary,
                activation_percent: percent,
            })
            .await
            .expect_err("out-of-range activation must be rejected");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[tokio::test]
async fn test_muscle_link_pair_unique_and_updatable() {
    let db = create_test_db().await;

    let exercise = db.create_exercise(&bench_press()).await.unwrap();
    let chest = db
        .create_muscle_group("Chest", "", BodyRegion::Upper)
        .await
        .unwrap();

    let link = db
        .link_exercise_muscle(&NewExerciseMuscleLink {
            exercise_id: exercise.id,
            muscle_group_id: chest.id,
            focus_level: FocusLevel::Primary,
            activation_percent: 80,
        })
        .await
        .unwrap();

    let err = db
        .link_exercise_muscle(&NewExerciseMuscleLink {
            exercise_id: exercise.id,
            muscle_group_id: chest.id,
            focus_level: FocusLevel::Secondary,
            activation_percent: 40,
        })
        .await
        .expect_err("Linking the same pair twice must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let mut adjusted = link.clone();
    adjusted.activation_percent = 85;
    db.update_exercise_muscle_link(&adjusted)
        .await
        .expect("Failed to update link");

    let links = db.list_exercise_muscle_links(exercise.id).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].activation_percent, 85);
}

#[tokio::test]
async fn test_deleting_category_detaches_exercises() {
    let db = create_test_db().await;

    let category = db
        .create_exercise_category("Strength", "")
        .await
        .unwrap();
    let mut new_exercise = bench_press();
    new_exercise.category_id = Some(category.id);
    let exercise = db.create_exercise(&new_exercise).await.unwrap();

    db.delete_exercise_category(category.id)
        .await
        .expect("Failed to delete category");

    // The exercise survives with its category cleared
    let after = db
        .get_exercise(exercise.id)
        .await
        .unwrap()
        .expect("Exercise must survive category deletion");
    assert_eq!(after.category_id, None);
}

#[tokio::test]
async fn test_deleting_exercise_cascades_links_and_media() {
    let db = create_test_db().await;

    let exercise = db.create_exercise(&bench_press()).await.unwrap();
    let chest = db
        .create_muscle_group("Chest", "", BodyRegion::Upper)
        .await
        .unwrap();
    let barbell = db.create_equipment("Barbell", "", false).await.unwrap();

    db.link_exercise_muscle(&NewExerciseMuscleLink {
        exercise_id: exercise.id,
        muscle_group_id: chest.id,
        focus_level: FocusLevel::Primary,
        activation_percent: 80,
    })
    .await
    .unwrap();
    db.link_exercise_equipment(&NewExerciseEquipmentLink {
        exercise_id: exercise.id,
        equipment_id: barbell.id,
        mandatory: true,
        quantity: 1,
    })
    .await
    .unwrap();
    db.add_exercise_media(&NewExerciseMedia {
        exercise_id: exercise.id,
        media_type: MediaType::Video,
        file_reference: "exercises/bench-press.mp4".into(),
        title: "Setup and execution".into(),
        description: String::new(),
        is_primary: true,
        display_order: 1,
    })
    .await
    .unwrap();

    db.delete_exercise(exercise.id)
        .await
        .expect("Failed to delete exercise");

    assert!(db
        .list_exercise_muscle_links(exercise.id)
        .await
        .unwrap()
        .is_empty());
    assert!(db
        .list_exercise_equipment_links(exercise.id)
        .await
        .unwrap()
        .is_empty());
    assert!(db.list_exercise_media(exercise.id).await.unwrap().is_empty());

    // The catalog rows on the other side of the junctions survive
    assert!(db.get_muscle_group(chest.id).await.unwrap().is_some());
    assert!(db.get_equipment(barbell.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_media_listed_in_gallery_order() {
    let db = create_test_db().await;

    let exercise = db.create_exercise(&bench_press()).await.unwrap();

    for (order, title) in [(3, "Lockout"), (1, "Setup"), (2, "Descent")] {
        db.add_exercise_media(&NewExerciseMedia {
            exercise_id: exercise.id,
            media_type: MediaType::Image,
            file_reference: format!("exercises/bench-{order}.jpg"),
            title: title.into(),
            description: String::new(),
            is_primary: order == 1,
            display_order: order,
        })
        .await
        .unwrap();
    }

    let media = db.list_exercise_media(exercise.id).await.unwrap();
    let titles: Vec<&str> = media.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Setup", "Descent", "Lockout"]);
}

#[tokio::test]
async fn test_attribute_taxonomy_cascade() {
    let db = create_test_db().await;

    let grip = db.create_attribute_type("Grip", "").await.unwrap();
    let width = db
        .create_attribute_option(grip.id, "Width", "")
        .await
        .unwrap();
    let close = db
        .create_attribute_sub_option(width.id, "Close", "")
        .await
        .unwrap();
    let wide = db
        .create_attribute_sub_option(width.id, "Wide", "")
        .await
        .unwrap();

    let exercise = db.create_exercise(&bench_press()).await.unwrap();
    db.link_exercise_attribute(exercise.id, close.id)
        .await
        .unwrap();
    db.link_exercise_attribute(exercise.id, wide.id)
        .await
        .unwrap();

    // The same leaf cannot be linked twice
    let err = db
        .link_exercise_attribute(exercise.id, close.id)
        .await
        .expect_err("Duplicate attribute link must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    assert_eq!(
        db.list_exercise_attribute_links(exercise.id)
            .await
            .unwrap()
            .len(),
        2
    );

    // Deleting the taxonomy root removes the whole sub-tree and the links
    db.delete_attribute_type(grip.id)
        .await
        .expect("Failed to delete attribute type");

    assert!(db.list_attribute_options(grip.id).await.unwrap().is_empty());
    assert!(db
        .list_attribute_sub_options(width.id)
        .await
        .unwrap()
        .is_empty());
    assert!(db
        .list_exercise_attribute_links(exercise.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_linking_requires_existing_rows() {
    let db = create_test_db().await;

    let exercise = db.create_exercise(&bench_press()).await.unwrap();

    let err = db
        .link_exercise_muscle(&NewExerciseMuscleLink {
            exercise_id: exercise.id,
            muscle_group_id: 9999,
            focus_level: FocusLevel::Primary,
            activation_percent: 50,
        })
        .await
        .expect_err("Linking a missing muscle group must be rejected");
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
