// Module database - SQLite connection pool and trail queries
// The service only ever reads; the pool is opened read-only.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::models::{Trail, TrailCoordinate};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("{0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Shared handle on the trail store
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a read-only connection pool on `database_url`
    ///
    /// # Errors
    /// Returns DatabaseError if the URL is invalid or the database cannot be opened
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        if max_connections == 0 {
            return Err(DatabaseError::ConfigError(
                "max_connections must be at least 1".to_string(),
            ));
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(DatabaseError::ConnectionError)?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(DatabaseError::ConnectionError)?;

        tracing::info!("SQLite connection pool opened on {}", database_url);

        Ok(Self { pool })
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All trails, newest first. Rows sharing a `created_at` keep the store's order.
    pub async fn list_trails(&self) -> Result<Vec<Trail>, DatabaseError> {
        let trails = sqlx::query_as::<_, Trail>(
            "SELECT id, name, description, created_at FROM trail_metadata ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::info!("Retrieved {} trails", trails.len());
        Ok(trails)
    }

    /// Look up a trail by the raw id taken from the request.
    ///
    /// The id is bound as text; SQLite compares it numerically against the
    /// integer column, so a non-numeric id matches nothing.
    pub async fn find_trail(&self, trail_id: &str) -> Result<Option<Trail>, DatabaseError> {
        let trail = sqlx::query_as::<_, Trail>(
            "SELECT id, name, description, created_at FROM trail_metadata WHERE id = ?",
        )
        .bind(trail_id)
        .fetch_optional(&self.pool)
        .await?;

        if trail.is_none() {
            tracing::debug!("No trail with id {:?}", trail_id);
        }
        Ok(trail)
    }

    /// Waypoints of a trail in ascending `sequence_order`
    pub async fn trail_coordinates(
        &self,
        trail_id: &str,
    ) -> Result<Vec<TrailCoordinate>, DatabaseError> {
        let coordinates = sqlx::query_as::<_, TrailCoordinate>(
            r#"
            SELECT trail_id, sequence_order, latitude, longitude, name, description
            FROM trail_coordinates
            WHERE trail_id = ?
            ORDER BY sequence_order
            "#,
        )
        .bind(trail_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::info!(
            "Retrieved {} coordinates for trail {:?}",
            coordinates.len(),
            trail_id
        );
        Ok(coordinates)
    }
}
