use crate::handlers::greeting::greet;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query parameters accepted by the greeting endpoints.
///
/// `name` is optional; an absent or empty value greets the default "World".
#[derive(Deserialize)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

/// # Greeting Response
///
/// JSON body returned by `GET /api/hello`.
///
/// ## Fields
/// - `message`: The formatted greeting
/// - `timestamp`: RFC 3339 / ISO 8601 timestamp taken when the response was built
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello, World!",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String,
}

impl GreetingResponse {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            message: greet(name),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
