/// # Greeting Payloads
///
/// Request and response types for the greeting endpoints: the optional
/// `name` query parameter and the `message`/`timestamp` JSON body.
pub mod greeting;

/// # Health Status Response
///
/// Represents the operational status of the service.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("UP")
/// - `service`: Human-readable service identifier
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "Spring Boot Hello World"
/// }
/// ```
pub mod health;
