use super::*;
use crate::lesson::{ContentType, Lesson, LessonPatch, NewLesson};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use tempfile::TempDir;

async fn open_store() -> (TempDir, MarkdownStore<Lesson>) {
    let temp = TempDir::new().unwrap();
    let store = MarkdownStore::<Lesson>::open(temp.path().join("lessons"))
        .await
        .unwrap();
    (temp, store)
}

fn new_lesson(section_id: GroupId, title: &str, order_number: u32) -> NewLesson {
    NewLesson {
        section_id,
        title: title.to_string(),
        order_number,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_open_creates_directory() {
    let (_temp, store) = open_store().await;
    assert!(store.dir().is_dir());
}

#[tokio::test]
async fn test_insert_writes_one_file_per_record() {
    let (_temp, store) = open_store().await;

    let a = store.insert(new_lesson(1, "Intro", 1)).await.unwrap();
    let b = store.insert(new_lesson(1, "Setup", 2)).await.unwrap();

    assert_eq!((a.id, b.id), (1, 2));
    assert!(store.dir().join("1.md").exists());
    assert!(store.dir().join("2.md").exists());
}

#[tokio::test]
async fn test_record_survives_reopen() {
    let (temp, store) = open_store().await;
    let created = store
        .insert(NewLesson {
            content_type: Some(ContentType::Quiz),
            content: Some("What is 2 + 2?".to_string()),
            duration: Some(5),
            is_free: true,
            ..new_lesson(3, "Quiz 1", 1)
        })
        .await
        .unwrap();
    drop(store);

    let reopened = MarkdownStore::<Lesson>::open(temp.path().join("lessons"))
        .await
        .unwrap();
    let loaded = reopened.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(loaded, created);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (_temp, store) = open_store().await;
    store.insert(new_lesson(1, "a", 1)).await.unwrap();
    let b = store.insert(new_lesson(1, "b", 2)).await.unwrap();

    assert!(store.delete_by_id(b.id).await.unwrap());
    let c = store.insert(new_lesson(1, "c", 2)).await.unwrap();

    assert_eq!(c.id, 3);
}

#[tokio::test]
async fn test_delete_unknown_returns_false() {
    let (_temp, store) = open_store().await;
    assert!(!store.delete_by_id(9).await.unwrap());
}

#[tokio::test]
async fn test_find_where_orders_by_position() {
    let (_temp, store) = open_store().await;
    store.insert(new_lesson(1, "third", 3)).await.unwrap();
    store.insert(new_lesson(1, "first", 1)).await.unwrap();
    store.insert(new_lesson(2, "other", 1)).await.unwrap();
    store.insert(new_lesson(1, "second", 2)).await.unwrap();

    let titles: Vec<String> = store
        .find_where(1)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title)
        .collect();

    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_bulk_shift_touches_only_selected_range() {
    let (_temp, store) = open_store().await;
    for (position, title) in (1..).zip(["a", "b", "c", "d"]) {
        store.insert(new_lesson(1, title, position)).await.unwrap();
    }
    store.insert(new_lesson(2, "x", 2)).await.unwrap();

    let changed = store
        .bulk_shift(1, ShiftRange::Between { from: 2, to: 3 }, 1)
        .await
        .unwrap();

    assert_eq!(changed, 2);
    let positions: Vec<u32> = store
        .find_where(1)
        .await
        .unwrap()
        .iter()
        .map(|l| l.order_number)
        .collect();
    assert_eq!(positions, vec![1, 3, 4, 4]);
    let other = store.find_where(2).await.unwrap();
    assert_eq!(other[0].order_number, 2);
}

#[tokio::test]
async fn test_update_and_set_position() {
    let (_temp, store) = open_store().await;
    let a = store.insert(new_lesson(1, "a", 1)).await.unwrap();

    let updated = store
        .update(
            a.id,
            LessonPatch {
                title: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "renamed");

    let placed = store.set_position(a.id, 4, 2).await.unwrap().unwrap();
    assert_eq!((placed.section_id, placed.order_number), (4, 2));
    assert_eq!(store.find_by_id(a.id).await.unwrap().unwrap(), placed);

    assert!(store.update(99, LessonPatch::default()).await.unwrap().is_none());
    assert!(store.set_position(99, 1, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_title_and_content_round_trip_exactly() {
    let (temp, store) = open_store().await;
    let created = store
        .insert(NewLesson {
            content: Some("  indented code\n".to_string()),
            ..new_lesson(1, "Part 1\nPart 2", 1)
        })
        .await
        .unwrap();
    drop(store);

    let reopened = MarkdownStore::<Lesson>::open(temp.path().join("lessons"))
        .await
        .unwrap();
    let loaded = reopened.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(loaded.title, "Part 1\nPart 2");
    assert_eq!(loaded.content.as_deref(), Some("  indented code\n"));
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn test_deleted_record_is_gone() {
    let (_temp, store) = open_store().await;
    let a = store.insert(new_lesson(1, "a", 1)).await.unwrap();

    assert!(store.delete_by_id(a.id).await.unwrap());

    assert!(store.find_by_id(a.id).await.unwrap().is_none());
    assert!(store.find_all().await.unwrap().is_empty());
    assert!(!store.delete_by_id(a.id).await.unwrap());
    assert!(store.update(a.id, LessonPatch::default()).await.unwrap().is_none());
}

/// Write an mdstore item straight into the store directory, bypassing
/// the record mapping.
async fn write_raw_item(store: &MarkdownStore<Lesson>, id: &str, fields: serde_json::Value) {
    let custom_fields: HashMap<String, serde_json::Value> =
        serde_json::from_value(fields).unwrap();
    let options = CreateOptions {
        title: "raw".to_string(),
        body: String::new(),
        id: Some(id.to_string()),
        status: None,
        priority: None,
        tags: None,
        projects: None,
        custom_fields,
        comment: None,
    };
    mdstore::create(store.dir(), &store.config, options).await.unwrap();
}

async fn positions(store: &MarkdownStore<Lesson>, section_id: GroupId) -> Vec<(String, u32)> {
    store
        .find_where(section_id)
        .await
        .unwrap()
        .into_iter()
        .map(|l| (l.title, l.order_number))
        .collect()
}

#[tokio::test]
async fn test_unreadable_record_fails_shift_and_changes_nothing() {
    let (_temp, store) = open_store().await;
    for (position, title) in (1..).zip(["a", "b", "c"]) {
        store.insert(new_lesson(1, title, position)).await.unwrap();
    }
    write_raw_item(&store, "10", serde_json::json!({ "sectionId": 1 })).await;

    let err = store
        .bulk_shift(1, ShiftRange::AtOrAfter(1), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Unreadable { ref record, .. } if record == "10"));
    assert!(store.find_where(1).await.is_err());
}

#[tokio::test]
async fn test_item_with_foreign_id_is_unreadable() {
    let (_temp, store) = open_store().await;
    store.insert(new_lesson(1, "a", 1)).await.unwrap();
    write_raw_item(
        &store,
        "notes",
        serde_json::json!({ "sectionId": 1, "orderNumber": 2 }),
    )
    .await;

    assert!(matches!(
        store.find_all().await,
        Err(StoreError::Unreadable { ref record, .. }) if record == "notes"
    ));
    assert!(store.insert(new_lesson(1, "b", 2)).await.is_err());
}

#[tokio::test]
async fn test_failed_shift_write_restores_shifted_records() {
    let (_temp, store) = open_store().await;
    for (position, title) in (1..).zip(["a", "b", "c", "d"]) {
        store.insert(new_lesson(1, title, position)).await.unwrap();
    }
    store.shift_writes_left.store(2, Ordering::SeqCst);

    let result = store.bulk_shift(1, ShiftRange::AtOrAfter(2), 1).await;

    assert!(result.is_err());
    store.shift_writes_left.store(usize::MAX, Ordering::SeqCst);
    assert_eq!(
        positions(&store, 1).await,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
            ("d".to_string(), 4),
        ]
    );
}
