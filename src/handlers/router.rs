//! Command/callback router
//!
//! Maps an inbound event to a [`Reply`]. Routing itself is pure: it never
//! touches the network. Delivery goes through a [`ResponseSink`] picked by the
//! caller, so the same reply can be posted as a new message or edited into
//! an existing one.

use std::sync::Arc;

use tracing::debug;

use super::commands::Command;
use super::sink::ResponseSink;
use crate::config::Settings;
use crate::models::{CallbackAction, Notice, OutboundResponse};
use crate::services::{MockPriceFeed, PriceSource};
use crate::templates::{AppSection, Links, TemplateCatalog};
use crate::utils::errors::Result;

/// An event delivered by the transport
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    Command(Command),
    /// Raw callback data from an inline button
    Callback(String),
}

/// What the router decided to do with an event
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Respond(OutboundResponse),
    /// Toast only, nothing is sent to the chat
    Acknowledge(Notice),
    /// Unknown event, logged and dropped
    Ignore,
}

impl Reply {
    pub fn response(&self) -> Option<&OutboundResponse> {
        match self {
            Reply::Respond(response) => Some(response),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Reply::Acknowledge(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Immutable router shared by every handler
#[derive(Clone)]
pub struct Router {
    catalog: TemplateCatalog,
    prices: Arc<dyn PriceSource>,
}

impl Router {
    /// Router backed by the mock price feed
    pub fn new(settings: &Settings) -> Result<Self> {
        let feed = MockPriceFeed::for_endpoint(settings.price_api_url.as_deref());
        Self::with_price_source(settings, Arc::new(feed))
    }

    pub fn with_price_source(settings: &Settings, prices: Arc<dyn PriceSource>) -> Result<Self> {
        let links = Links::from_settings(settings)?;
        Ok(Self {
            catalog: TemplateCatalog::new(links),
            prices,
        })
    }

    /// Decide the reply for an event without delivering it
    pub fn route(&self, event: &InboundEvent) -> Reply {
        match event {
            InboundEvent::Command(command) => Reply::Respond(self.route_command(command)),
            InboundEvent::Callback(data) => match CallbackAction::parse(data) {
                Some(action) => self.route_callback(action),
                None => {
                    debug!(callback_data = %data, "No route for callback data");
                    Reply::Ignore
                }
            },
        }
    }

    pub fn route_command(&self, command: &Command) -> OutboundResponse {
        match command {
            Command::Start => self.catalog.welcome(),
            Command::Website => self.catalog.website(),
            Command::Price => self.price_view(),
            Command::Contract => self.catalog.contract(),
            Command::About => self.catalog.about(),
            Command::Help => self.catalog.help(),
            Command::Webapp => self.catalog.webapp(),
            Command::Balance => self.catalog.app_section(AppSection::Balance),
            Command::Airdrop => self.catalog.app_section(AppSection::Airdrop),
            Command::Vesting => self.catalog.app_section(AppSection::Vesting),
            Command::Mint => self.catalog.app_section(AppSection::Mint),
            Command::Nft => self.catalog.app_section(AppSection::Nft),
        }
    }

    pub fn route_callback(&self, action: CallbackAction) -> Reply {
        match action {
            CallbackAction::Website => Reply::Respond(self.catalog.website()),
            CallbackAction::Price | CallbackAction::RefreshPrice => Reply::Respond(self.price_view()),
            CallbackAction::Contract => Reply::Respond(self.catalog.contract()),
            CallbackAction::About => Reply::Respond(self.catalog.about()),
            CallbackAction::Help => Reply::Respond(self.catalog.help()),
            CallbackAction::CopyContract => Reply::Acknowledge(self.catalog.copy_contract_notice()),
            CallbackAction::StartOver => Reply::Respond(self.catalog.welcome()),
        }
    }

    fn price_view(&self) -> OutboundResponse {
        let quote = self.prices.quote();
        self.catalog.price(&quote, self.prices.is_mock())
    }

    /// Route an event and deliver the result through `sink`
    pub async fn dispatch(&self, event: &InboundEvent, sink: &dyn ResponseSink) -> Result<Reply> {
        let reply = self.route(event);
        deliver(&reply, sink).await?;
        Ok(reply)
    }
}

/// Send the response part of a reply, if any
pub async fn deliver(reply: &Reply, sink: &dyn ResponseSink) -> Result<()> {
    match reply {
        Reply::Respond(response) => sink.deliver(response).await,
        Reply::Acknowledge(_) | Reply::Ignore => Ok(()),
    }
}
