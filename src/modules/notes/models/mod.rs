pub mod note;

pub use note::{CreateNoteRequest, Note, NoteFilter, NoteView, UpdateNoteRequest};
