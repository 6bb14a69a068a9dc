//! Greeting operation shared by every transport.

use serde::{Deserialize, Serialize};

/// Name used when the caller supplies no text.
pub const DEFAULT_NAME: &str = "world";

/// Payload returned by the greeting operation.
///
/// Serializes as `{"greeting": "..."}` on every transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

/// Function reference handed to each transport adapter at startup.
pub type Greeter = fn(Option<&str>) -> Greeting;

/// Builds `"hello <text>"`, falling back to `"hello world"` when `text` is
/// absent or empty.
pub fn hello_world(text: Option<&str>) -> Greeting {
    let name = match text {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_NAME,
    };
    Greeting {
        greeting: format!("hello {name}"),
    }
}
