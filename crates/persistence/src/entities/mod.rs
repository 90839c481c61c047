//! Entity definitions (database row mappings).

pub mod movie;

pub use movie::MovieEntity;
