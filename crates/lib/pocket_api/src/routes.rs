//! Route paths served by the REST surface.

pub const GET_ROOT: &str = "/";
pub const GET_API_HELLO: &str = "/api/hello";
pub const GET_HEALTH: &str = "/health";
