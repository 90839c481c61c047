//! Movie entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the movies table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieEntity {
    pub id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub review: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MovieEntity> for domain::models::Movie {
    fn from(entity: MovieEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            review: entity.review,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_to_domain_conversion() {
        let entity = MovieEntity {
            id: Uuid::new_v4(),
            name: "Jaws".to_string(),
            year: Some(1975),
            review: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let movie: domain::models::Movie = entity.clone().into();
        assert_eq!(movie.id, entity.id);
        assert_eq!(movie.name, "Jaws");
        assert_eq!(movie.year, Some(1975));
        assert_eq!(movie.created_by, entity.created_by);
    }
}
