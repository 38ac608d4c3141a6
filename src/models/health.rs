use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "Spring Boot Hello World";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
