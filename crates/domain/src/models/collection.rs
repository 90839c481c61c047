//! Collection descriptor for the Movies collection.
//!
//! The descriptor captures the configuration facts fixed at startup: the
//! collection and type names, and which views are registered. It is
//! read-mostly shared state for the process lifetime.

use serde::Serialize;

use crate::models::movie::{COLLECTION_NAME, TYPE_NAME};
use crate::models::view::MovieView;

/// Static description of a registered collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectionDescriptor {
    pub collection_name: &'static str,
    pub type_name: &'static str,
    pub default_view: MovieView,
    pub views: &'static [MovieView],
}

/// The Movies collection as registered at startup.
pub fn movies_collection() -> CollectionDescriptor {
    CollectionDescriptor {
        collection_name: COLLECTION_NAME,
        type_name: TYPE_NAME,
        default_view: MovieView::Default,
        views: MovieView::all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_collection_names() {
        let collection = movies_collection();
        assert_eq!(collection.collection_name, "Movies");
        assert_eq!(collection.type_name, "Movie");
    }

    #[test]
    fn test_movies_collection_views() {
        let collection = movies_collection();
        assert_eq!(collection.default_view, MovieView::Default);
        assert_eq!(collection.views.len(), 2);
        assert!(collection.views.contains(&MovieView::ByName));
    }

    #[test]
    fn test_descriptor_serialization() {
        let collection = movies_collection();
        let json = serde_json::to_string(&collection).unwrap();
        assert!(json.contains("\"collection_name\":\"Movies\""));
        assert!(json.contains("\"type_name\":\"Movie\""));
        assert!(json.contains("by_name"));
    }
}
