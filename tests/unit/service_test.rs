// Generic service behavior through the notes module: NotFound signaling,
// overlay merges, and the unpaginated paging result.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use docgate::core::AppError;
use docgate::data::{MemoryStore, UnitOfWork};
use docgate::modules::notes::models::{CreateNoteRequest, NoteFilter, UpdateNoteRequest};
use docgate::modules::notes::services::NoteService;
use uuid::Uuid;

fn note_service() -> (Arc<MemoryStore>, NoteService) {
    let store = helpers::memory_store();
    let service = NoteService::new(Arc::new(UnitOfWork::new(store.clone())));
    (store, service)
}

fn create_request(title: &str) -> CreateNoteRequest {
    CreateNoteRequest {
        title: title.to_string(),
        body: "body".to_string(),
        tags: vec![],
    }
}

#[tokio::test]
async fn test_add_then_get_roundtrip() {
    let (_store, service) = note_service();

    service.add(create_request("groceries")).await.unwrap();

    // Add reports no identifier; recover it through the listing
    let page = service
        .get_paged_result(NoteFilter::default(), Uuid::nil())
        .await
        .unwrap();
    assert_eq!(page.total_counts, 1);
    let id = page.data[0].id;

    let view = service.get(id).await.unwrap();
    assert_eq!(view.title, "groceries");
    assert!(!view.is_deleted);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (_store, service) = note_service();

    let err = service.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_missing_is_not_found_and_writes_nothing() {
    let (store, service) = note_service();

    let err = service
        .update(
            UpdateNoteRequest {
                title: Some("new".to_string()),
                body: None,
                tags: None,
            },
            Uuid::new_v4(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.count("notes").await, 0);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let (_store, service) = note_service();

    let err = service.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_overlays_supplied_fields_only() {
    let (_store, service) = note_service();

    service.add(create_request("groceries")).await.unwrap();
    let page = service
        .get_paged_result(NoteFilter::default(), Uuid::nil())
        .await
        .unwrap();
    let id = page.data[0].id;

    let returned = service
        .update(
            UpdateNoteRequest {
                title: Some("shopping".to_string()),
                body: None,
                tags: None,
            },
            id,
        )
        .await
        .unwrap();
    assert_eq!(returned, id);

    let view = service.get(id).await.unwrap();
    assert_eq!(view.title, "shopping");
    assert_eq!(view.body, "body");
    assert!(view.date_updated >= view.date_created);
}

#[tokio::test]
async fn test_delete_flags_the_note_but_keeps_it_readable() {
    let (store, service) = note_service();

    service.add(create_request("groceries")).await.unwrap();
    let page = service
        .get_paged_result(NoteFilter::default(), Uuid::nil())
        .await
        .unwrap();
    let id = page.data[0].id;

    let returned = service.delete(id).await.unwrap();
    assert_eq!(returned, id);

    // Soft delete: the document stays in the store and reads still see it
    assert_eq!(store.count("notes").await, 1);
    let view = service.get(id).await.unwrap();
    assert!(view.is_deleted);
}

#[tokio::test]
async fn test_paged_result_ignores_filter_and_user_id() {
    let (_store, service) = note_service();

    service.add(create_request("one")).await.unwrap();
    service.add(create_request("two")).await.unwrap();
    service.add(create_request("three")).await.unwrap();

    let unfiltered = service
        .get_paged_result(NoteFilter::default(), Uuid::nil())
        .await
        .unwrap();
    let filtered = service
        .get_paged_result(
            NoteFilter {
                title: Some("one".to_string()),
                tag: Some("nope".to_string()),
            },
            Uuid::new_v4(),
        )
        .await
        .unwrap();

    assert_eq!(unfiltered.total_counts, 3);
    assert_eq!(filtered.total_counts, 3);

    let unfiltered_ids: Vec<_> = unfiltered.data.iter().map(|view| view.id).collect();
    let filtered_ids: Vec<_> = filtered.data.iter().map(|view| view.id).collect();
    assert_eq!(unfiltered_ids, filtered_ids);
}
