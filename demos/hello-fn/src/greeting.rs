/// Format a greeting for the given name.
pub fn create_greeting(name: &str) -> String {
    format!("Hello, {name}!")
}
