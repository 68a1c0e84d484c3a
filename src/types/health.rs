//! Types for the `/health` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Service status string (e.g. "ok")
    pub status: String,
    /// Server-side timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// API version, if reported
    #[serde(default)]
    pub version: Option<String>,
    /// Uptime in seconds, if reported
    #[serde(default)]
    pub uptime: Option<f64>,
}
