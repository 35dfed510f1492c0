//! docgate — CRUD scaffolding for document-store-backed web APIs
//!
//! Layers, top down: controllers → generic service → unit of work → generic
//! repository → document store. New entity types implement [`data::Entity`]
//! and pick up soft-delete and timestamp bookkeeping from the shared layers.

pub mod config;
pub mod core;
pub mod data;
pub mod modules;
pub mod service;

// Re-export commonly used types
pub use modules::notes;
