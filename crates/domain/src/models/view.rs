//! Query views for the Movies collection.
//!
//! A view is a named transformation from query terms to a selector plus a
//! sort order. Views are registered once at startup and parameterize the
//! list query; they carry no state of their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for resolving a view from request input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("View requires the '{0}' term")]
    MissingTerm(&'static str),
}

/// Sort direction for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Field a view sorts on. Movies only ever sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
}

/// Sort specification produced by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Selector produced by a view. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSelector {
    pub name: Option<String>,
}

/// A fully resolved list query: selector plus sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub selector: MovieSelector,
    pub sort: ViewSort,
}

/// Terms supplied by the caller, consumed by views that filter.
#[derive(Debug, Clone, Default)]
pub struct ViewTerms {
    pub name: Option<String>,
}

/// Registered views on the Movies collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieView {
    /// Newest first, no filter.
    Default,
    /// Filter by exact name, oldest first.
    ByName,
}

impl MovieView {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieView::Default => "default",
            MovieView::ByName => "by_name",
        }
    }

    /// All registered view names, in registration order.
    pub fn all() -> &'static [MovieView] {
        &[MovieView::Default, MovieView::ByName]
    }

    /// Builds the selector and sort for this view from the given terms.
    pub fn build(&self, terms: &ViewTerms) -> Result<ViewQuery, ViewError> {
        match self {
            MovieView::Default => Ok(ViewQuery {
                selector: MovieSelector::default(),
                sort: ViewSort {
                    field: SortField::CreatedAt,
                    order: SortOrder::Descending,
                },
            }),
            MovieView::ByName => {
                let name = terms
                    .name
                    .as_ref()
                    .filter(|n| !n.is_empty())
                    .ok_or(ViewError::MissingTerm("name"))?;
                Ok(ViewQuery {
                    selector: MovieSelector {
                        name: Some(name.clone()),
                    },
                    sort: ViewSort {
                        field: SortField::CreatedAt,
                        order: SortOrder::Ascending,
                    },
                })
            }
        }
    }
}

impl FromStr for MovieView {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(MovieView::Default),
            // "byNameView" is the historical registration name
            "by_name" | "byNameView" => Ok(MovieView::ByName),
            other => Err(ViewError::UnknownView(other.to_string())),
        }
    }
}

impl fmt::Display for MovieView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
