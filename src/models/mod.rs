//! Data models module
//!
//! Transport-independent shapes the router produces: outbound responses,
//! inline buttons, callback actions and price quotes.

pub mod callback;
pub mod price;
pub mod response;

pub use callback::CallbackAction;
pub use price::PriceQuote;
pub use response::{Button, ButtonAction, Notice, OutboundResponse, ResponseBody, TextFormat};
