//! Bot handlers module
//!
//! This module contains the router and the teloxide endpoints feeding it:
//! - Command endpoint for slash commands
//! - Callback endpoint for inline keyboard presses
//! - Response sinks deciding between new messages and in-place edits

pub mod callbacks;
pub mod commands;
pub mod router;
pub mod sink;

pub use callbacks::handle_callback_query;
pub use commands::{handle_command, Command};
pub use router::{InboundEvent, Reply, Router};
pub use sink::{DeliveryMode, EditInPlaceSink, NewMessageSink, ResponseSink};
