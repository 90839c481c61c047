//! Shared utilities and common types for the Movie Catalog backend.
//!
//! This crate provides common functionality used across all other crates:
//! - JWT token verification and issuance (RS256)
//! - Cursor-based pagination for list endpoints

pub mod jwt;
pub mod pagination;
