/// Name substituted when the caller does not provide one.
pub const DEFAULT_NAME: &str = "World";

/// Resolves the name a greeting should address.
///
/// An absent or empty name falls back to [`DEFAULT_NAME`]; anything else is
/// used verbatim, whitespace included.
///
/// # Arguments
/// * `name` - The caller-supplied name, if any
///
/// # Returns
/// The effective name for the greeting
pub fn effective_name(name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_NAME,
    }
}

/// Formats the greeting message for an optional name.
///
/// # Examples
/// ```
/// use greeting_service::handlers::greeting::greet;
///
/// assert_eq!(greet(Some("Ada")), "Hello, Ada!");
/// assert_eq!(greet(Some("")), "Hello, World!");
/// assert_eq!(greet(None), "Hello, World!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", effective_name(name))
}
