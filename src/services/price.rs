//! Price quote service
//!
//! There is no real price feed behind this bot. [`MockPriceFeed`] produces
//! random quotes inside fixed, plausible-looking ranges and is the only
//! [`PriceSource`] shipped. Quotes are independent: two calls in a row may
//! disagree wildly and nothing is cached.

use rand::Rng;
use tracing::info;

use crate::models::PriceQuote;
use crate::utils::logging;

/// Anything that can produce a token quote on demand
pub trait PriceSource: Send + Sync {
    fn quote(&self) -> PriceQuote;

    /// Whether quotes are synthetic; templates label mock data as such
    fn is_mock(&self) -> bool;
}

/// Stand-in price source backed by `rand::thread_rng`
#[derive(Debug, Clone, Default)]
pub struct MockPriceFeed;

impl MockPriceFeed {
    pub fn new() -> Self {
        Self
    }

    /// Build the mock feed, noting any configured real endpoint it replaces
    pub fn for_endpoint(price_api_url: Option<&str>) -> Self {
        if let Some(url) = price_api_url.filter(|u| !u.is_empty()) {
            info!(price_api_url = url, "Price API configured but not wired up; serving mock quotes");
        }
        Self
    }

    /// Quote drawn from a caller-supplied generator
    pub fn quote_with<R: Rng>(&self, rng: &mut R) -> PriceQuote {
        let quote = PriceQuote::sample(rng);
        logging::log_mock_quote(quote.price, quote.change_24h);
        quote
    }
}

impl PriceSource for MockPriceFeed {
    fn quote(&self) -> PriceQuote {
        self.quote_with(&mut rand::thread_rng())
    }

    fn is_mock(&self) -> bool {
        true
    }
}
