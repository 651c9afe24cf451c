//! Telegram front-end.
//!
//! Long-polls the Bot API, runs every text message through the
//! [`QueryDispatcher`](crate::dispatcher::QueryDispatcher) and replies to the
//! originating message, rendering action links as an inline keyboard.

mod client;
mod runner;
pub mod types;

pub use client::TelegramClient;
pub use runner::{is_start_command, poll_once, reply_for, run_polling};
