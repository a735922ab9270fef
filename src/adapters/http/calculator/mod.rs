//! Calorie calculator endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::calculator_routes;
