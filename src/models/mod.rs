pub mod event;
pub mod review;
pub mod user;

pub use event::Event;
pub use review::Review;
pub use user::{UserProfile, UserType, Viewer};

/// Text shown for a field the backend left out.
pub const UNDEFINED: &str = "undefined";

/// Renders an optional wire value the way the browser stringifies a missing one.
pub fn or_undefined<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}
