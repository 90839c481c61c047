//! Movie domain models.
//!
//! A movie is the single document type served by this backend. The
//! collection itself (name, type name, registered views) is described in
//! [`crate::models::collection`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Name of the collection as registered at startup.
pub const COLLECTION_NAME: &str = "Movies";

/// Singular type name of one document in the collection.
pub const TYPE_NAME: &str = "Movie";

/// A movie document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub review: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateMovieRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1888, max = 2100, message = "Year must be between 1888 and 2100"))]
    pub year: Option<i32>,

    #[validate(length(max = 2000, message = "Review must be at most 2000 characters"))]
    pub review: Option<String>,
}

/// Request payload for updating a movie. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateMovieRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: Option<String>,

    #[validate(range(min = 1888, max = 2100, message = "Year must be between 1888 and 2100"))]
    pub year: Option<i32>,

    #[validate(length(max = 2000, message = "Review must be at most 2000 characters"))]
    pub review: Option<String>,
}

/// Response for a single movie document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MovieResponse {
    pub id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub review: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            year: movie.year,
            review: movie.review,
            created_by: movie.created_by,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// Query parameters for listing movies.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListMoviesQuery {
    /// View name; defaults to the collection's default view.
    pub view: Option<String>,
    /// Name term, consumed by the by-name view.
    pub name: Option<String>,
    /// Page size, clamped to 1..=100.
    pub limit: Option<i64>,
    /// Opaque pagination cursor from a previous page.
    pub cursor: Option<String>,
}

/// Response for listing movies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListMoviesResponse {
    pub data: Vec<MovieResponse>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    #[test]
    fn test_collection_constants() {
        assert_eq!(COLLECTION_NAME, "Movies");
        assert_eq!(TYPE_NAME, "Movie");
    }

    #[test]
    fn test_create_movie_request_valid() {
        let name: String = Sentence(1..4).fake();
        let request = CreateMovieRequest {
            name,
            year: Some(1975),
            review: Some("A classic.".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_movie_request_empty_name() {
        let request = CreateMovieRequest {
            name: String::new(),
            year: None,
            review: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_movie_request_name_too_long() {
        let request = CreateMovieRequest {
            name: "a".repeat(201),
            year: None,
            review: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_movie_request_year_out_of_range() {
        let too_early = CreateMovieRequest {
            name: "Jaws".to_string(),
            year: Some(1800),
            review: None,
        };
        assert!(too_early.validate().is_err());

        let too_late = CreateMovieRequest {
            name: "Jaws 14".to_string(),
            year: Some(3000),
            review: None,
        };
        assert!(too_late.validate().is_err());
    }

    #[test]
    fn test_update_movie_request_all_optional() {
        let request = UpdateMovieRequest {
            name: None,
            year: None,
            review: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_movie_request_invalid_name() {
        let request = UpdateMovieRequest {
            name: Some(String::new()),
            year: None,
            review: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_movie_response_from_movie() {
        let movie = Movie {
            id: Uuid::new_v4(),
            name: "Jaws".to_string(),
            year: Some(1975),
            review: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response: MovieResponse = movie.clone().into();
        assert_eq!(response.id, movie.id);
        assert_eq!(response.name, "Jaws");
        assert_eq!(response.year, Some(1975));
        assert_eq!(response.created_by, movie.created_by);
    }

    #[test]
    fn test_movie_serialization() {
        let movie = Movie {
            id: Uuid::new_v4(),
            name: "Jaws".to_string(),
            year: Some(1975),
            review: Some("Big shark.".to_string()),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"name\":\"Jaws\""));
        assert!(json.contains("\"year\":1975"));
    }
}
