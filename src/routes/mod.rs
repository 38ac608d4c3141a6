use actix_web::web;

/// # Home Page Endpoint
///
/// Renders the HTML greeting page from the embedded template.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `name` (optional): defaults to "World" when absent or empty
///
/// ## Response
/// - **200 OK**: HTML page with the greeting, the effective name, and the
///   current server time
pub mod home;

/// # Greeting Endpoints
///
/// The JSON greeting (`GET /api/hello`) plus the plain-text variants
/// (`GET /hello`, `GET /hello/{name}`).
pub mod greeting;

/// # Health Check Endpoint
///
/// Returns the service's fixed operational status.
///
/// ## Response
///
/// - **200 OK**: Service is up
///   - Body: JSON object with `status` ("UP") and `service`
pub mod health;

/// # Route Configuration
///
/// Registers every endpoint with the Actix-web service configuration. The
/// route table is built once here at startup; there is no other registry.
///
/// ## Mounted Endpoints
///
/// ```text
/// GET /             - HTML greeting page
/// GET /hello        - Plain-text greeting
/// GET /hello/{name} - Personalized plain-text greeting
/// GET /api/hello    - JSON greeting with timestamp
/// GET /health       - Service health status
/// ```
///
/// See [`home::configure_routes`], [`greeting::configure_routes`] and
/// [`health::configure_routes`] for the per-module registrations.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes)
        .configure(greeting::configure_routes)
        .configure(health::configure_routes);
}
