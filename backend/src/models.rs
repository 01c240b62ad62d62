use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Trail metadata row (`trail_metadata`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Trail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Stored text timestamp, passed through untouched.
    pub created_at: String,
}

/// One waypoint of a trail (`trail_coordinates`), ordered by `sequence_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrailCoordinate {
    pub trail_id: i64,
    pub sequence_order: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub description: Option<String>,
}

impl TrailCoordinate {
    /// Description to publish, skipping blank values.
    pub fn published_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|desc| !desc.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailDetail {
    pub trail: Trail,
    pub coordinates: Vec<TrailCoordinate>,
}
