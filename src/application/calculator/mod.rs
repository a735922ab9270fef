//! Calculator handler.

mod calculate;

pub use calculate::{CalculateHandler, CalculateQuery, CalculateResult};
