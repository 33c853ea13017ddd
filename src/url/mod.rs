//! URL handling: event-link filtering and the fixed-origin resolver

mod resolve;

pub use resolve::{is_event_link, resolve_event_url, EVENT_PATH_MARKER};
