//! # pocket_core
//!
//! Core domain logic for the Pocket Joe template.

pub mod hello;

pub use hello::{Greeter, Greeting, hello_world};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
