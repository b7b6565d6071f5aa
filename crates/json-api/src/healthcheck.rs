//! Liveness Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Answers as long as the process is serving requests; the database is not consulted.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses((status_code = StatusCode::OK, description = "Service is up")),
)]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
