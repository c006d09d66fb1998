//! Greeting formatting helper.

/// Formats a greeting for the given name.
pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}
