use crate::handlers::greeting::greet;
use crate::models::greeting::{GreetingRequest, GreetingResponse};
use actix_web::{HttpResponse, Responder, get, web};

/// # JSON Greeting Endpoint
///
/// Returns the greeting as a JSON object with the time it was produced.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `name` (optional): Name to greet; absent or empty defaults to "World"
///
/// ## Response
/// - **200 OK**: Content-Type `application/json`
///   - Body: [`GreetingResponse`] with `message` and an RFC 3339 `timestamp`
///
/// ## Example Response
/// ```json
/// {
///   "message": "Hello, John!",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/hello",
    params(
        ("name" = Option<String>, Query, description = "Name to greet; defaults to \"World\"")
    ),
    responses(
        (status = 200, description = "Greeting with timestamp", body = GreetingResponse)
    ),
    tag = "Greeting"
)]
#[get("/hello")]
pub async fn hello_api(query: web::Query<GreetingRequest>) -> impl Responder {
    HttpResponse::Ok().json(GreetingResponse::new(query.name.as_deref()))
}

/// Plain-text greeting with the default name.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Plain-text greeting", body = String, content_type = "text/plain")
    ),
    tag = "Greeting"
)]
#[get("/hello")]
pub async fn hello() -> impl Responder {
    greet(None)
}

/// Plain-text greeting personalized by path segment.
#[utoipa::path(
    get,
    path = "/hello/{name}",
    params(
        ("name" = String, Path, description = "Name to greet")
    ),
    responses(
        (status = 200, description = "Plain-text greeting", body = String, content_type = "text/plain")
    ),
    tag = "Greeting"
)]
#[get("/hello/{name}")]
pub async fn hello_name(name: web::Path<String>) -> impl Responder {
    greet(Some(name.as_str()))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(web::scope("/api").service(hello_api))
        .service(hello)
        .service(hello_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_api_hello_without_name() {
        // Arrange
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/hello").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(
            content_type, "application/json",
            "Content-Type should be application/json"
        );

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");
        assert_eq!(body_json["message"], "Hello, World!");

        // Make sure the timestamp is a valid ISO 8601 date
        let timestamp = body_json["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        let _dt = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_api_hello_with_name() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/hello?name=John")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["message"], "Hello, John!");
    }

    #[actix_web::test]
    async fn test_api_hello_empty_name_defaults() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/hello?name=")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["message"], "Hello, World!");
    }

    #[actix_web::test]
    async fn test_hello_plain_text() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert!(
            content_type.to_str().unwrap().starts_with("text/plain"),
            "Content-Type should be text/plain"
        );

        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello, World!");
    }

    #[actix_web::test]
    async fn test_hello_with_path_name() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/hello/Alice").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello, Alice!");
    }

    #[actix_web::test]
    async fn test_api_hello_message_is_idempotent() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let mut messages = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri("/api/hello?name=Ada")
                .to_request();
            let resp = test::call_service(&app, req).await;
            let body = test::read_body(resp).await;
            let body_json: Value = serde_json::from_slice(&body).unwrap();
            messages.push(body_json["message"].as_str().unwrap().to_string());
        }

        // Timestamps may differ between calls; the message must not
        assert_eq!(messages[0], messages[1]);
        assert_eq!(messages[0], "Hello, Ada!");
    }
}
