//! Domain entities and the listing pipeline shared by every surface.

pub mod advocate;
pub mod query;
pub mod types;
