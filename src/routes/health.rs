use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Reports the service's static operational status. This is not a live
/// check; there are no failure modes.
///
/// ## Response
///
/// - **200 OK**: Service is up
///   - Body: JSON object with `status` ("UP") and `service` (the service
///     identifier)
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "service": "Spring Boot Hello World"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
