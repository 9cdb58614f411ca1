pub mod accessors;
pub mod models;
