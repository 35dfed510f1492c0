//! Note controller for HTTP endpoints
//!
//! One unit-of-work scope is opened per request; the service translates
//! absent lookups into 404s via `AppError::NotFound`.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::core::{Result, ResultResponse};
use crate::data::{DocumentStore, UnitOfWork};
use crate::modules::notes::models::{CreateNoteRequest, NoteFilter, UpdateNoteRequest};
use crate::modules::notes::services::NoteService;

fn note_service(store: &web::Data<dyn DocumentStore>) -> NoteService {
    NoteService::new(Arc::new(UnitOfWork::new(store.clone().into_inner())))
}

/// Caller identity injected by the upstream gateway; absent or malformed
/// headers resolve to the nil UUID
fn principal_user_id(req: &HttpRequest) -> Uuid {
    req.headers()
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(Uuid::nil)
}

/// Create a note
///
/// POST /v1/notes
pub async fn create_note(
    store: web::Data<dyn DocumentStore>,
    payload: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse> {
    note_service(&store).add(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ResultResponse::new(serde_json::Value::Null)))
}

/// Get a note by id
///
/// GET /v1/notes/{id}
pub async fn get_note(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let view = note_service(&store).get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ResultResponse::new(view)))
}

/// Update a note
///
/// PUT /v1/notes/{id}
pub async fn update_note(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<Uuid>,
    payload: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse> {
    let updated = note_service(&store)
        .update(payload.into_inner(), id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ResultResponse::new(updated)))
}

/// Delete a note
///
/// DELETE /v1/notes/{id}
pub async fn delete_note(
    store: web::Data<dyn DocumentStore>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = note_service(&store).delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ResultResponse::new(deleted)))
}

/// List notes
///
/// GET /v1/notes
pub async fn list_notes(
    store: web::Data<dyn DocumentStore>,
    req: HttpRequest,
    filter: web::Query<NoteFilter>,
) -> Result<HttpResponse> {
    let page = note_service(&store)
        .get_paged_result(filter.into_inner(), principal_user_id(&req))
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Configure note routes
pub fn configure_note_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
