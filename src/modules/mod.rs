// Feature modules wired onto the generic CRUD scaffold

pub mod notes;
