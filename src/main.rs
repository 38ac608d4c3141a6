use actix_web::{App, HttpServer, web::Data};
use greeting_service::openapi::ApiDoc;
use greeting_service::{logger, routes, templates};
use std::env;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Greeting Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Templated home page rendered through Tera
/// - JSON and plain-text greeting endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Home page: `/`
/// - Greetings: `/hello`, `/hello/{name}`, `/api/hello` (configured in routes)
/// - Health check: `/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default; `HOST` and `PORT`
///   environment variables override it
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    // A broken template should fail startup, not the first request
    let templates = match templates::build() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load templates: {}", e);
            std::process::exit(1);
        }
    };

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!("Greeting Service starting on http://{}:{}", host, port);
    info!("Available endpoints:");
    info!("  GET /             - Home page");
    info!("  GET /hello        - Hello message");
    info!("  GET /hello/{{name}} - Personalized greeting");
    info!("  GET /api/hello    - JSON greeting");
    info!("  GET /health       - Service health");
    info!("  GET /swagger-ui/  - API documentation");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(templates.clone()))
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
