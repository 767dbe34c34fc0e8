//! Services module
//!
//! Data sources consumed by the message templates.

pub mod price;

pub use price::{MockPriceFeed, PriceSource};
