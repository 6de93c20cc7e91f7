//! HTTP layer - routes, JSON payloads and the server.
//!
//! The handlers only decode the request and map results to status codes; all room logic
//! lives in [`crate::core`].

/// JSON request/response payloads
pub mod models;
/// Route definitions and error responses
pub mod routes;
/// Server startup and graceful shutdown
pub mod server;

pub use routes::{SharedQueries, router};
pub use server::Server;
