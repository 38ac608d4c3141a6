use crate::handlers::greeting;
use crate::models::greeting::GreetingRequest;
use crate::templates::INDEX_TEMPLATE;
use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;
use tera::{Context, Tera};

/// # Home Page Endpoint
///
/// Renders the HTML greeting page.
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `name` (optional): Name to greet; absent or empty defaults to "World"
///
/// ## Response
/// - **200 OK**: Rendered page containing the greeting, the effective name,
///   and the server's local time formatted as `yyyy-MM-dd HH:mm:ss`
///
/// A missing parameter is not an error; the only failure path is a template
/// rendering bug, which maps to **500 Internal Server Error**.
#[get("/")]
pub async fn home(
    query: web::Query<GreetingRequest>,
    templates: web::Data<Tera>,
) -> Result<impl Responder, actix_web::Error> {
    let name = query.name.as_deref();

    // View-model consumed by templates/index.html
    let mut context = Context::new();
    context.insert("greeting", &greeting::greet(name));
    context.insert(
        "current_time",
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    context.insert("name", greeting::effective_name(name));

    let page = templates
        .render(INDEX_TEMPLATE, &context)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("template error: {e}")))?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(home);
}
