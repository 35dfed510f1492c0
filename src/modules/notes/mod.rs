// Notes module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Note, NoteFilter, NoteView};
pub use services::NoteService;
