//! Admin-guarded user management endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::user_routes;
