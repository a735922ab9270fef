//! Harmoni - Nutrition Platform Backend
//!
//! Email-verified user registration, tariff management with attached PDF
//! files, Stripe payment processing with webhook-driven status updates, a
//! stateless calorie calculator, and admin authentication.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
