//! HTTP adapter - Axum routers, handlers, and DTOs.

pub mod admin;
pub mod app;
pub mod auth;
pub mod calculator;
pub mod middleware;
pub mod payment;
pub mod response;
pub mod state;
pub mod tariff;
pub mod user;

pub use app::app_router;
pub use state::AppState;
