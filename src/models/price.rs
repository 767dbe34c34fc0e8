//! Price quote model

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;

/// Token price in USD
pub const PRICE_RANGE: RangeInclusive<f64> = 0.005..=0.015;
/// 24h change in percent
pub const CHANGE_RANGE: RangeInclusive<f64> = -5.0..=5.0;
/// Market cap in whole USD
pub const MARKET_CAP_RANGE: RangeInclusive<u64> = 1_000_000..=5_000_000;
/// 24h volume in whole USD
pub const VOLUME_RANGE: RangeInclusive<u64> = 50_000..=500_000;

/// A point-in-time token quote
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: u64,
    pub volume_24h: u64,
    pub generated_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Draw a synthetic quote uniformly from the fixed ranges
    ///
    /// Values are made up. Nothing here reflects a market.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            price: rng.gen_range(PRICE_RANGE),
            change_24h: rng.gen_range(CHANGE_RANGE),
            market_cap: rng.gen_range(MARKET_CAP_RANGE),
            volume_24h: rng.gen_range(VOLUME_RANGE),
            generated_at: Utc::now(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}
