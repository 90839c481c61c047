//! Movie collection routes: list/detail reads and create/update/delete
//! mutations.
//!
//! Reads are public, matching the collection's default resolvers. Mutations
//! check the caller's role grants before touching the store; the `.own`
//! grants additionally require document ownership.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::movie::{
    CreateMovieRequest, ListMoviesQuery, ListMoviesResponse, Movie, MovieResponse,
    UpdateMovieRequest,
};
use domain::models::view::{MovieView, ViewError, ViewTerms};
use persistence::repositories::MovieRepository;
use shared::pagination::{decode_cursor, encode_cursor};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;
use crate::middleware::metrics::record_movie_created;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Resolve the requested view name, falling back to the default view.
fn resolve_view(param: Option<&str>) -> Result<MovieView, ViewError> {
    match param {
        Some(name) => MovieView::from_str(name),
        None => Ok(MovieView::Default),
    }
}

/// Clamp the requested page size into the allowed range.
fn page_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// List movies through a view.
///
/// GET /api/v1/movies
///
/// Query parameters: `view` (default `default`), `name` (term for the
/// by-name view), `limit`, `cursor`. Public.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Json<ListMoviesResponse>, ApiError> {
    let view = resolve_view(query.view.as_deref())?;
    let terms = ViewTerms {
        name: query.name.clone(),
    };
    let view_query = view.build(&terms)?;

    let limit = page_limit(query.limit);
    let cursor = query
        .cursor
        .as_deref()
        .map(decode_cursor)
        .transpose()?;

    let repo = MovieRepository::new(state.pool.clone());
    let movies = repo.list(&view_query, cursor, limit).await?;

    let next_cursor = if movies.len() as i64 == limit {
        movies
            .last()
            .map(|last| encode_cursor(last.created_at, last.id))
    } else {
        None
    };

    let data: Vec<MovieResponse> = movies
        .into_iter()
        .map(|entity| MovieResponse::from(Movie::from(entity)))
        .collect();
    let count = data.len();

    info!(
        view = %view,
        count = count,
        name_term = ?query.name,
        "Listed movies"
    );

    Ok(Json(ListMoviesResponse {
        data,
        count,
        next_cursor,
    }))
}

/// Get a single movie.
///
/// GET /api/v1/movies/:movie_id
///
/// Public.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<MovieResponse>, ApiError> {
    let repo = MovieRepository::new(state.pool.clone());

    let movie = repo
        .find_by_id(movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    Ok(Json(MovieResponse::from(Movie::from(movie))))
}

/// Create a new movie.
///
/// POST /api/v1/movies
///
/// Requires the `movies.new` grant. The caller becomes the document owner.
pub async fn create_movie(
    State(state): State<AppState>,
    user: UserAuth,
    Json(request): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    if !user.role.can_create_movie() {
        return Err(ApiError::Forbidden(
            "Your role is not allowed to create movies".to_string(),
        ));
    }

    request.validate()?;

    let repo = MovieRepository::new(state.pool.clone());
    let movie = repo
        .insert_movie(
            &request.name,
            request.year,
            request.review.as_deref(),
            user.user_id,
        )
        .await?;

    record_movie_created();
    info!(
        movie_id = %movie.id,
        movie_name = %movie.name,
        user_id = %user.user_id,
        "Movie created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MovieResponse::from(Movie::from(movie))),
    ))
}

/// Update a movie.
///
/// PUT /api/v1/movies/:movie_id
///
/// Requires `movies.edit.own` on the caller's own document, or
/// `movies.edit.all`.
pub async fn update_movie(
    State(state): State<AppState>,
    user: UserAuth,
    Path(movie_id): Path<Uuid>,
    Json(request): Json<UpdateMovieRequest>,
) -> Result<Json<MovieResponse>, ApiError> {
    request.validate()?;

    let repo = MovieRepository::new(state.pool.clone());

    let movie = repo
        .find_by_id(movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    let is_owner = movie.created_by == user.user_id;
    if !user.role.can_edit_movie(is_owner) {
        return Err(ApiError::Forbidden(
            "You can only edit movies you created".to_string(),
        ));
    }

    let updated = repo
        .update_movie(
            movie_id,
            request.name.as_deref(),
            request.year,
            request.review.as_deref(),
        )
        .await?;

    info!(
        movie_id = %movie_id,
        user_id = %user.user_id,
        is_owner = is_owner,
        "Movie updated"
    );

    Ok(Json(MovieResponse::from(Movie::from(updated))))
}

/// Delete a movie.
///
/// DELETE /api/v1/movies/:movie_id
///
/// Requires `movies.remove.own` on the caller's own document, or
/// `movies.remove.all`.
pub async fn delete_movie(
    State(state): State<AppState>,
    user: UserAuth,
    Path(movie_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = MovieRepository::new(state.pool.clone());

    let movie = repo
        .find_by_id(movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    let is_owner = movie.created_by == user.user_id;
    if !user.role.can_remove_movie(is_owner) {
        return Err(ApiError::Forbidden(
            "You can only remove movies you created".to_string(),
        ));
    }

    let rows_affected = repo.delete_movie(movie_id).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound("Movie not found".to_string()));
    }

    info!(
        movie_id = %movie_id,
        user_id = %user.user_id,
        is_owner = is_owner,
        "Movie deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
