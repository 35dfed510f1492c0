pub mod note_controller;

pub use note_controller::configure_note_routes;
