//! Payment endpoints: intent creation, webhook ingestion, status reads.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::payment_routes;
