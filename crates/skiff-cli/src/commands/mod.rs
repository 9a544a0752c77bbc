mod bundle;
mod declarations;
mod doctor;
mod new;
mod package;
mod stage;

pub use bundle::bundle;
pub use declarations::declarations;
pub use doctor::doctor;
pub use new::new_function;
pub use package::package;
pub use stage::stage;

/// Environment indicator inlined into bundled output.
/// Read once per invocation and passed down explicitly.
pub(crate) fn node_env() -> String {
    std::env::var("NODE_ENV").unwrap_or_else(|_| "development".to_owned())
}
