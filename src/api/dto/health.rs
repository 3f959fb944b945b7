//! Health check DTOs for API responses.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use utoipa::ToSchema;

/// Health report for the service and the store behind it.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "version": "0.1.0",
    "timestamp": "2024-06-01T12:00:00.000Z",
    "checks": {
        "database": {
            "status": "healthy",
            "message": "Connected",
            "response_time_ms": 3
        }
    }
}))]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// UTC time the report was produced
    #[schema(example = "2024-06-01T12:00:00.000Z")]
    pub timestamp: String,
    pub checks: BTreeMap<String, ComponentHealth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Result of probing one dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
}

impl ComponentHealth {
    pub fn healthy(message: &str, elapsed: Duration) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: Some(message.to_string()),
            response_time_ms: Some(elapsed.as_millis() as u64),
        }
    }

    pub fn unhealthy(message: String, elapsed: Duration) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message),
            response_time_ms: Some(elapsed.as_millis() as u64),
        }
    }
}

impl HealthResponse {
    /// Overall status is unhealthy as soon as one component is.
    pub fn from_checks(version: &str, timestamp: String, checks: BTreeMap<String, ComponentHealth>) -> Self {
        let status = if checks.values().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        Self {
            status,
            version: version.to_string(),
            timestamp,
            checks,
        }
    }
}
