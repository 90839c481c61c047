//! Domain layer for the Movie Catalog backend.
//!
//! This crate contains:
//! - The Movie model and its request/response DTOs
//! - The query view registry (default and by-name list views)
//! - The role and action-permission registry
//! - The collection descriptor assembled at startup

pub mod models;
