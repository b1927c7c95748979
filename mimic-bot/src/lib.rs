//! # mimic-bot
//!
//! Glue between a chat gateway and the model registry. Plain messages are
//! learned passively; messages carrying the guild's trigger (or a mention of
//! the bot) are parsed as commands and answered with a reply string.

pub mod bot;
pub mod command;
pub mod driver;
pub mod message;
pub mod replies;

pub use bot::Bot;
pub use command::{parse_command, ChatCommand, CommandError};
pub use message::IncomingMessage;
