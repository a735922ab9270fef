//! Tariff CRUD and file endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{file_routes, tariff_routes};
