//! Domain layer - entities, value objects, and business rules.

pub mod admin;
pub mod calculator;
pub mod foundation;
pub mod payment;
pub mod tariff;
pub mod user;
pub mod verification;
