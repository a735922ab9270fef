//! Adapters - implementations of ports against real infrastructure.

pub mod http;
pub mod postgres;
pub mod resend;
pub mod storage;
pub mod stripe;
