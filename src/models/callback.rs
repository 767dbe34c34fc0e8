//! Callback-data identifiers carried by inline buttons

use std::fmt;

/// Every callback the bot knows how to answer
///
/// Callback data is parsed into this enum once, at the edge; nothing past
/// the callback endpoint compares raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackAction {
    Website,
    Price,
    Contract,
    About,
    Help,
    RefreshPrice,
    CopyContract,
    StartOver,
}

impl CallbackAction {
    pub const ALL: [CallbackAction; 8] = [
        CallbackAction::Website,
        CallbackAction::Price,
        CallbackAction::Contract,
        CallbackAction::About,
        CallbackAction::Help,
        CallbackAction::RefreshPrice,
        CallbackAction::CopyContract,
        CallbackAction::StartOver,
    ];

    /// Callback data written into buttons
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackAction::Website => "website",
            CallbackAction::Price => "price",
            CallbackAction::Contract => "contract",
            CallbackAction::About => "about",
            CallbackAction::Help => "help",
            CallbackAction::RefreshPrice => "refresh_price",
            CallbackAction::CopyContract => "copy_contract",
            CallbackAction::StartOver => "start_over",
        }
    }

    /// Exact-match parse of callback data; `start` is accepted for `start_over`
    pub fn parse(data: &str) -> Option<Self> {
        if data == "start" {
            return Some(CallbackAction::StartOver);
        }
        Self::ALL.into_iter().find(|action| action.as_str() == data)
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
