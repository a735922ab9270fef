//! Registration endpoints: verification code request and confirmation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
