use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. The HTML home page is deliberately absent; only the machine-facing
/// endpoints are documented.
///
/// # Endpoints
/// - Greeting (JSON): `GET /api/hello`
/// - Greeting (plain text): `GET /hello`, `GET /hello/{name}`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `GreetingResponse`: Greeting message with timestamp
/// - `HealthResponse`: Service status payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::greeting::hello_api,
        crate::routes::greeting::hello,
        crate::routes::greeting::hello_name,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::greeting::GreetingResponse,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Greeting endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "A small greeting API with HTML, JSON and plain-text surfaces",
        title = "Greeting Service API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
