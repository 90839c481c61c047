//! HTTP route handlers.

pub mod health;
pub mod movies;
pub mod roles;
