/// Formats a greeting for an optional caller-supplied name.
///
/// Applies the defaulting rule (absent or empty name becomes "World") and
/// produces the `Hello, <name>!` message used by every endpoint.
///
/// # Examples
/// ```
/// use greeting_service::handlers::greeting::greet;
///
/// assert_eq!(greet(Some("Ada")), "Hello, Ada!");
/// assert_eq!(greet(None), "Hello, World!");
/// ```
pub mod greeting;
