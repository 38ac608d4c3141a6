use greeting_service::handlers::greeting::greet;
use sysinfo::System;

// Toolchain version embedded by build.rs.
const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Describes the host operating system, preferring the detailed name
/// reported by the OS over the compile-time platform constant.
fn os_description() -> String {
    System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// Reads the user name from the process environment.
fn user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

/// The most basic console variant of the greeting service: prints the
/// default greeting and a few environment properties, then exits 0.
fn main() {
    println!("{}", greet(None));
    println!("This is a minimal Rust application running locally.");
    println!("Rust version: {}", RUSTC_VERSION);
    println!("Operating System: {}", os_description());
    println!("User: {}", user_name());
}
