use crate::modules::notes::models::{
    CreateNoteRequest, Note, NoteFilter, NoteView, UpdateNoteRequest,
};
use crate::service::CrudService;

/// CRUD service for notes; all behavior comes from the generic service
pub type NoteService = CrudService<Note, NoteFilter, NoteView, CreateNoteRequest, UpdateNoteRequest>;
