//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain operations across ports. Each handler owns
//! its command/query input, a result type, and the ports it needs; wiring
//! happens once at startup.

pub mod admin;
pub mod calculator;
pub mod cleanup;
pub mod payment;
pub mod tariff;
pub mod user;
pub mod verification;
