//! Stripe adapter - PaymentIntent creation against the Stripe REST API.

mod gateway;

pub use gateway::{StripeConfig, StripeGateway};
