// Generic service layer

pub mod crud;
pub mod mapping;

pub use crud::CrudService;
pub use mapping::{MapInto, MergeInto};
