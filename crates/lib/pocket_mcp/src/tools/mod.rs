//! MCP tool implementations.

pub mod hello;
mod tests;
