//! Movie repository for database operations.
//!
//! List queries are shaped by a resolved [`ViewQuery`]: the selector becomes
//! the WHERE clause and the view sort becomes the ORDER BY. Pagination uses
//! a composite `(created_at, id)` cursor so rows with identical timestamps
//! page stably.

use chrono::{DateTime, Utc};
use domain::models::view::{SortOrder, ViewQuery};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::MovieEntity;
use crate::metrics::QueryTimer;

const MOVIE_COLUMNS: &str = "id, name, year, review, created_by, created_at, updated_at";

/// Repository for movie-related database operations.
#[derive(Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Creates a new MovieRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a new movie document.
    pub async fn insert_movie(
        &self,
        name: &str,
        year: Option<i32>,
        review: Option<&str>,
        created_by: Uuid,
    ) -> Result<MovieEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_movie");
        let result = sqlx::query_as::<_, MovieEntity>(&format!(
            r#"
            INSERT INTO movies (name, year, review, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING {MOVIE_COLUMNS}
            "#,
        ))
        .bind(name)
        .bind(year)
        .bind(review)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a movie by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MovieEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_movie_by_id");
        let result = sqlx::query_as::<_, MovieEntity>(&format!(
            r#"
            SELECT {MOVIE_COLUMNS}
            FROM movies
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List movies through a resolved view query.
    ///
    /// # Arguments
    /// * `query` - selector and sort produced by a view
    /// * `cursor` - exclusive `(created_at, id)` position from a previous page
    /// * `limit` - maximum rows to return
    pub async fn list(
        &self,
        query: &ViewQuery,
        cursor: Option<(DateTime<Utc>, Uuid)>,
        limit: i64,
    ) -> Result<Vec<MovieEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_movies");

        // Direction keywords come from the view's sort enum, never from input.
        let (order, cmp) = match query.sort.order {
            SortOrder::Descending => ("DESC", "<"),
            SortOrder::Ascending => ("ASC", ">"),
        };

        let result = match (&query.selector.name, cursor) {
            (Some(name), Some((cursor_at, cursor_id))) => {
                sqlx::query_as::<_, MovieEntity>(&format!(
                    r#"
                    SELECT {MOVIE_COLUMNS}
                    FROM movies
                    WHERE name = $1 AND (created_at, id) {cmp} ($2, $3)
                    ORDER BY created_at {order}, id {order}
                    LIMIT $4
                    "#,
                ))
                .bind(name)
                .bind(cursor_at)
                .bind(cursor_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (Some(name), None) => {
                sqlx::query_as::<_, MovieEntity>(&format!(
                    r#"
                    SELECT {MOVIE_COLUMNS}
                    FROM movies
                    WHERE name = $1
                    ORDER BY created_at {order}, id {order}
                    LIMIT $2
                    "#,
                ))
                .bind(name)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some((cursor_at, cursor_id))) => {
                sqlx::query_as::<_, MovieEntity>(&format!(
                    r#"
                    SELECT {MOVIE_COLUMNS}
                    FROM movies
                    WHERE (created_at, id) {cmp} ($1, $2)
                    ORDER BY created_at {order}, id {order}
                    LIMIT $3
                    "#,
                ))
                .bind(cursor_at)
                .bind(cursor_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, MovieEntity>(&format!(
                    r#"
                    SELECT {MOVIE_COLUMNS}
                    FROM movies
                    ORDER BY created_at {order}, id {order}
                    LIMIT $1
                    "#,
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        };

        timer.record();
        result
    }

    /// Update a movie. Absent fields keep their current value.
    pub async fn update_movie(
        &self,
        id: Uuid,
        name: Option<&str>,
        year: Option<i32>,
        review: Option<&str>,
    ) -> Result<MovieEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_movie");
        let result = sqlx::query_as::<_, MovieEntity>(&format!(
            r#"
            UPDATE movies
            SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                review = COALESCE($4, review),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {MOVIE_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(name)
        .bind(year)
        .bind(review)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a movie.
    pub async fn delete_movie(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_movie");
        let result = sqlx::query(
            r#"
            DELETE FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: MovieRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
