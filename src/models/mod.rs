//! Database and configuration models.

pub mod advocate;
#[cfg(feature = "server")]
pub mod config;
