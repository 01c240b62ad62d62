use serde::{Deserialize, Serialize};

/// A bare track point, as produced by the GPX converter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// Body of the fallback page listing the available endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub endpoints: Vec<String>,
}
