use tera::Tera;

/// Name under which the home view is registered.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Builds the template set used by the HTML endpoints.
///
/// Templates are embedded at compile time, so the server binary carries its
/// views with it and rendering never depends on the working directory.
///
/// # Returns
/// The configured [`Tera`] instance, or a [`tera::Error`] if a template
/// fails to parse
pub fn build() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}
